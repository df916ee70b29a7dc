//! End-to-end decision tests over the library: one snapshot in, at most
//! one artifact descriptor out.

use clipsave::clipboard::ClipboardSnapshot;
use clipsave::save::{plan, ContentKind, Payload};

#[test]
fn image_only_snapshot_saves_a_png() {
    let snapshot = ClipboardSnapshot {
        image_png: Some(vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]),
        ..Default::default()
    };

    let artifact = plan(snapshot).unwrap();
    assert_eq!(artifact.kind, ContentKind::Image);
    assert_eq!(artifact.kind.prefix(), "Clip-Img-");
    assert_eq!(artifact.kind.extension(), "png");
    assert!(matches!(artifact.payload, Payload::Bytes(_)));
}

#[test]
fn rich_text_that_is_not_python_saves_html() {
    let snapshot = ClipboardSnapshot {
        text: Some("Quarterly report\n".into()),
        html: Some("<h1>Quarterly report</h1>".into()),
        ..Default::default()
    };

    let artifact = plan(snapshot).unwrap();
    assert_eq!(artifact.kind, ContentKind::Html);
    assert_eq!(artifact.kind.prefix(), "Clip-Html-");
    assert_eq!(artifact.kind.extension(), "html");
    assert_eq!(
        artifact.payload,
        Payload::Text("<h1>Quarterly report</h1>\n".into())
    );
}

#[test]
fn plain_text_without_html_saves_markdown() {
    let snapshot = ClipboardSnapshot::from_text("just a note");

    let artifact = plan(snapshot).unwrap();
    assert_eq!(artifact.kind, ContentKind::Markdown);
    assert_eq!(artifact.kind.prefix(), "Clip-Md-");
    assert_eq!(artifact.kind.extension(), "md");
    assert_eq!(artifact.payload, Payload::Text("just a note\n".into()));
}

#[test]
fn python_looking_text_beats_html() {
    let snapshot = ClipboardSnapshot {
        text: Some("import os\nclass Foo:\n    pass\n".into()),
        html: Some("<pre>import os</pre>".into()),
        ..Default::default()
    };

    let artifact = plan(snapshot).unwrap();
    assert_eq!(artifact.kind, ContentKind::Python);
    assert_eq!(artifact.kind.prefix(), "Clip-Py-");
    assert_eq!(artifact.kind.extension(), "py");
}

#[test]
fn empty_snapshot_saves_nothing() {
    assert_eq!(plan(ClipboardSnapshot::default()), None);
}
