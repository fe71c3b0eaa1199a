use crate::editor::{Editor, GestureOutcome};

use super::InputEvent;

/// Routes a canvas input event to the matching editor gesture
pub fn route_event(event: &InputEvent, editor: &mut Editor) -> GestureOutcome {
    match *event {
        InputEvent::PointerDown { x, y } => editor.pointer_down(x, y),
        InputEvent::PointerMove { x, y } => editor.pointer_move(x, y),
        InputEvent::PointerUp => editor.pointer_up(),
        InputEvent::PointerLeave => editor.pointer_leave(),
    }
}
