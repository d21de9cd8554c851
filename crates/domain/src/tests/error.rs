// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EmptyField { field: "name" };
    assert_eq!(format!("{err}"), "Field 'name' cannot be empty");

    let err: DomainError = DomainError::DuplicateName {
        name: String::from("sample1"),
    };
    assert_eq!(format!("{err}"), "Name 'sample1' is used more than once");

    let err: DomainError = DomainError::InvalidDate {
        value: String::from("2024-13-01"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date '2024-13-01': expected YYYY-MM-DD"
    );

    let err: DomainError = DomainError::HeicNotSupported;
    assert_eq!(format!("{err}"), "HEIC/HEIF images are not supported");

    let err: DomainError = DomainError::UnsupportedImageFormat {
        extension: String::from(".gif"),
    };
    assert_eq!(
        format!("{err}"),
        "Unsupported image format '.gif': only JPG and PNG are accepted"
    );

    let err: DomainError = DomainError::UnknownResource(String::from("widgets"));
    assert_eq!(format!("{err}"), "Unknown resource: widgets");
}

#[test]
fn test_domain_error_codes_are_stable() {
    assert_eq!(DomainError::EmptyField { field: "text" }.code(), "empty-field");
    assert_eq!(
        DomainError::DuplicateName {
            name: String::from("a")
        }
        .code(),
        "duplicate-name"
    );
    assert_eq!(
        DomainError::InvalidDate {
            value: String::new()
        }
        .code(),
        "invalid-date"
    );
}

#[test]
fn test_domain_error_implements_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::HeicNotSupported);
    assert_eq!(err.to_string(), "HEIC/HEIF images are not supported");
}
