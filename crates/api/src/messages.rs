// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Messages shown inline in the admin console and public forms.

use folio_domain::{DomainError, ResourceKind};

/// Shown when login credentials do not match.
pub const LOGIN_FAILED: &str = "メールかパスワードが違います。";

/// Shown when a contact submission lacks a required field.
pub const CONTACT_REQUIRED: &str = "お名前・メールアドレス・お問い合わせ内容は必須です。";

const HEIC_REJECTED: &str = "HEIC形式の画像はアップロードできません。";
const FORMAT_REJECTED: &str = "画像はJPGまたはPNG形式のみ対応しています。";
const INVALID_DATE: &str = "取材日の形式が正しくありません。";

/// Returns the message for a rejected image upload.
#[must_use]
pub const fn upload_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::HeicNotSupported => HEIC_REJECTED,
        _ => FORMAT_REJECTED,
    }
}

/// Returns the admin-facing message for a content rule violation on a
/// resource's list or form page.
#[must_use]
pub fn rejection_message(kind: ResourceKind, err: &DomainError) -> String {
    let message: &str = match (kind, err) {
        (_, DomainError::HeicNotSupported | DomainError::UnsupportedImageFormat { .. }) => {
            upload_message(err)
        }
        (ResourceKind::Categories, DomainError::EmptyField { .. }) => {
            "カテゴリ名は空欄にできません。"
        }
        (ResourceKind::Categories, DomainError::DuplicateName { .. }) => {
            "カテゴリ名が重複しています。"
        }
        (ResourceKind::Tags, DomainError::EmptyField { .. }) => "タグ名は空欄にできません。",
        (ResourceKind::Tags, DomainError::DuplicateName { .. }) => "タグ名が重複しています。",
        (ResourceKind::HeroPhrases, DomainError::EmptyField { .. }) => {
            "フレーズは空欄にできません。"
        }
        (ResourceKind::News, DomainError::EmptyField { .. }) => {
            "タイトル・リンク・取材日は必須です。"
        }
        (ResourceKind::News, DomainError::InvalidDate { .. }) => INVALID_DATE,
        (ResourceKind::Topics, DomainError::EmptyField { .. }) => "タイトルと本文は必須です。",
        _ => return err.to_string(),
    };
    message.to_string()
}
