//! Browser tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::window;

use hanzi_widgets::{start_credits, start_zhuyin, stop_credits, stop_zhuyin};

wasm_bindgen_test_configure!(run_in_browser);

fn mounted(id: &str) -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

#[wasm_bindgen_test]
fn credits_mount_and_unmount_repeatedly() {
    for _ in 0..3 {
        start_credits(r#"{"font_size_px": 300}"#).unwrap();
        assert!(mounted("hw-credits"));
        stop_credits();
        assert!(!mounted("hw-credits"));
    }
}

#[wasm_bindgen_test]
fn zhuyin_mounts_and_unmounts_repeatedly() {
    for _ in 0..3 {
        start_zhuyin().unwrap();
        assert!(mounted("hw-zhuyin"));
        stop_zhuyin();
        assert!(!mounted("hw-zhuyin"));
    }
}
