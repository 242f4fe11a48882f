// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness
// ABOUTME: Re-exports helper modules for bloom-cli
// ABOUTME: Provides display formatting utilities

pub mod display;
