// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness
// ABOUTME: Re-exports command modules for bloom-cli
// ABOUTME: Provides access to preference management and planning commands

pub mod plan;
pub mod preferences;
