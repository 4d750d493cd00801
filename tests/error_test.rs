use std::io;

use feijoa::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::RelativePathError { name: "partial".to_string() };
    assert_eq!(
        err.to_string(),
        "cannot locate template `partial`: relative path without originating path"
    );

    let err = Error::TemplateNotFoundError { path: "/views/missing.tmpl".to_string() };
    assert_eq!(err.to_string(), "cannot locate template `/views/missing.tmpl`");

    let err = Error::ProcessorError("step failed".to_string());
    assert_eq!(err.to_string(), "processor error: step failed");

    let err = Error::TokenCompileError("bad token".to_string());
    assert_eq!(err.to_string(), "token compile error: bad token");
}
