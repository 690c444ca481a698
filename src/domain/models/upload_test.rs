use super::PendingUpload;
use super::UploadKind;

#[test]
fn it_detects_pdfs() {
    let upload = PendingUpload::new("notes/chapter-one.pdf", None);
    assert_eq!(upload.kind(), UploadKind::Pdf);
    assert_eq!(upload.mime_type(), "application/pdf");
    assert_eq!(upload.kind().form_field(), "pdf");
}

#[test]
fn it_detects_images() {
    let upload = PendingUpload::new("scans/whiteboard.PNG", None);
    assert_eq!(upload.kind(), UploadKind::Image);
    assert_eq!(upload.mime_type(), "image/png");
    assert_eq!(upload.kind().form_field(), "image");
}

#[test]
fn it_defaults_unknown_extensions_to_pdf() {
    let upload = PendingUpload::new("notes/chapter-one.docx", None);
    assert_eq!(upload.kind(), UploadKind::Pdf);
}

#[test]
fn it_extracts_file_names() {
    let upload = PendingUpload::new("notes/chapter-one.pdf", None);
    assert_eq!(upload.file_name(), "chapter-one.pdf");
}
