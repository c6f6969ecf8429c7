//! ユーザー通知（window.alert）

use contract_analyzer_common::{Notice, Notifier};

/// ブロッキングのアラートで通知する
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        gloo::console::warn!(format!("notice: {:?}", notice));
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(notice.message());
        }
    }
}
