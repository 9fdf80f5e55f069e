//! Terminal restore contract: leave the alternate screen exactly once.

use std::sync::Arc;

use hello_world::core::layout;
use hello_world::term::{encode_enter_into, encode_frame_into, SessionState};
use hello_world::types::LayoutParams;

#[test]
fn shutdown_hook_restores_terminal_and_prints_greeting() {
    let state = Arc::new(SessionState::new("Hello, world!\n".to_string()));
    let hook_state = Arc::clone(&state);

    // A signal listener and the guard's drop race for the restore.
    let mut from_signal = Vec::new();
    let mut from_drop = Vec::new();
    assert!(hook_state.restore_into(&mut from_signal).unwrap());
    assert!(!state.restore_into(&mut from_drop).unwrap());

    let out = String::from_utf8(from_signal).unwrap();
    let show = out.find("\x1b[?25h").expect("cursor shown");
    let leave = out.find("\x1b[?1049l").expect("alternate screen left");
    let greeting = out.find("Hello, world!").expect("greeting printed");
    assert!(show < leave && leave < greeting);
    assert!(from_drop.is_empty());
}

#[test]
fn enter_then_frame_output_is_well_formed() {
    let mut out = Vec::new();
    encode_enter_into(&mut out).unwrap();
    let frame = layout("hi", 1000, 4, &LayoutParams::default());
    encode_frame_into(Some("greeting"), &frame, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\x1b[?1049h"));
    assert!(text.ends_with("\x1b[1;1Hgreeting\r\nhi  \r\n"));
}
