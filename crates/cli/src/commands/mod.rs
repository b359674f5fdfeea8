// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod demo;
pub mod filter;
pub mod list;

use std::io::{self, Write};

use crate::error::Result;

/// Run `f` against a locked, buffered stdout and flush it afterwards.
pub(crate) fn with_stdout<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    f(&mut out)?;
    out.flush()?;
    Ok(())
}
