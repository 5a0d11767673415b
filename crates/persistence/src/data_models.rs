// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::diesel_schema::blobs;

/// A named blob as written to the `blobs` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = blobs)]
pub struct NewBlob<'a> {
    pub blob_key: &'a str,
    pub blob_value: &'a str,
}
