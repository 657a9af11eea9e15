// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Conscript: lay out text in a constructed script from the command line

fn main() -> anyhow::Result<()> {
    conscript::run()
}
