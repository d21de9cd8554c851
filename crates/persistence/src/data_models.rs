// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A stored administrator account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminData {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

/// A stored admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub id: i64,
    pub token: String,
    pub admin_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}
