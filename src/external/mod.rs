// ABOUTME: External HTTP clients beyond the LLM provider
// ABOUTME: Currently the decorative image fetcher used by the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! External service clients

pub mod images;

pub use images::ImageFetcher;
