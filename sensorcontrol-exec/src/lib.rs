// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Execution contexts and subscribers for sensorcontrol.
//!
//! Streams are consumed on the background (tokio) context. Anything that
//! touches a widget is posted to the single [`UiContext`] queue, either
//! directly or through [`SubscribeOnUiExt::subscribe_on_ui`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod logging;

pub mod exec_error;
pub mod subscribe;
pub mod subscribe_on_ui;
pub mod ui_context;
pub mod widgets;

pub use exec_error::ExecError;
pub use subscribe::SubscribeExt;
pub use subscribe_on_ui::SubscribeOnUiExt;
pub use ui_context::UiContext;
pub use widgets::{TextView, ToastDuration, Toaster};
