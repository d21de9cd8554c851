// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{ApiError, StoredUpload, is_servable_name, prepare_upload};

#[test]
fn test_stored_name_is_timestamped_and_sanitized() {
    let stored: StoredUpload =
        prepare_upload("My Photo (1)!.JPG", datetime!(2026-01-01 00:00:00.123 UTC)).unwrap();

    assert_eq!(stored.file_name, "1767225600123-MyPhoto1.JPG");
    assert_eq!(stored.public_url, "/uploads/1767225600123-MyPhoto1.JPG");
}

#[test]
fn test_directory_components_are_dropped() {
    let stored: StoredUpload =
        prepare_upload("C:\\photos\\../cat_1-a.png", datetime!(2026-01-01 00:00 UTC)).unwrap();

    assert_eq!(stored.file_name, "1767225600000-cat_1-a.png");
}

#[test]
fn test_non_ascii_stem_is_removed() {
    let stored: StoredUpload =
        prepare_upload("写真.jpeg", datetime!(2026-01-01 00:00 UTC)).unwrap();

    assert_eq!(stored.file_name, "1767225600000-.jpeg");
}

#[test]
fn test_heic_is_rejected() {
    let result = prepare_upload("IMG_0001.HEIC", datetime!(2026-01-01 00:00 UTC));

    assert_eq!(
        result,
        Err(ApiError::InvalidInput {
            field: String::from("image"),
            message: String::from("HEIC形式の画像はアップロードできません。"),
        })
    );
}

#[test]
fn test_other_formats_are_rejected() {
    for name in ["anim.gif", "vector.svg", "noextension"] {
        let result = prepare_upload(name, datetime!(2026-01-01 00:00 UTC));
        assert_eq!(
            result.unwrap_err().inline_message(),
            Some("画像はJPGまたはPNG形式のみ対応しています。"),
            "{name}"
        );
    }
}

#[test]
fn test_servable_names() {
    assert!(is_servable_name("1767225600000-cat.png"));
    assert!(!is_servable_name("../secret"));
    assert!(!is_servable_name(".hidden"));
    assert!(!is_servable_name("a/b.png"));
    assert!(!is_servable_name(""));
}
