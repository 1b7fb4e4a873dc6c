// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use dnaform::errors::DnaFormError;

fn main() -> Result<(), DnaFormError> {
    dnaform::run()
}
