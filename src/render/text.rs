// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::surface::{Font, Surface};

pub const ELLIPSIS: &str = "…";

/// Shortens `text` until it fits `max_width` as measured by `surface`.
///
/// Text that already fits is returned unchanged. Otherwise characters are dropped from the end
/// one at a time and `…` appended, re-measuring after each drop, so the result always ends in
/// `…`. When not even `…` alone fits, `…` is returned anyway.
pub fn fit_label<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    font: &Font,
    max_width: f64,
) -> String {
    if surface.measure_text(text, font) <= max_width {
        return text.to_owned();
    }

    let mut trimmed = text.to_owned();
    let mut candidate = String::with_capacity(text.len() + ELLIPSIS.len());
    while trimmed.pop().is_some() {
        candidate.clear();
        candidate.push_str(&trimmed);
        candidate.push_str(ELLIPSIS);
        if surface.measure_text(&candidate, font) <= max_width {
            return candidate;
        }
    }

    ELLIPSIS.to_owned()
}
