//! Accessibility widget UI layer.
//!
//! The panel itself is rendered by `resources/widget/widget.js` inside the page.
//! `bridge` turns core requests into script calls; `webview_app` hosts a page in
//! a `wry` WebView:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! Communication between the page script and the core uses wry IPC.

pub mod bridge;

#[cfg(feature = "gui")]
pub mod webview_app;
