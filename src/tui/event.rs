use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};

/// Input events the form understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Mouse button pressed at a screen cell.
    Mouse { row: u16, col: u16 },
    /// Backspace or Delete.
    Erase,
    /// Up or Shift+Tab.
    Prev,
    /// Down or Tab.
    Next,
    /// Enter.
    Confirm,
    /// Visible ASCII character.
    Char(char),
    /// Ctrl+C (raw mode swallows SIGINT).
    Interrupt,
}

/// Editing input forwarded to the focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Backspace,
    Char(char),
}

/// A blocking supply of input events.
pub trait EventSource {
    /// Blocks until the terminal reports something.
    ///
    /// Returns `None` for events the form ignores (resize, key release, ...).
    fn next_event(&mut self) -> std::io::Result<Option<FormEvent>>;
}

/// Reads events from the real terminal via crossterm.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> std::io::Result<Option<FormEvent>> {
        Ok(classify(event::read()?))
    }
}

/// Maps a raw crossterm event onto a `FormEvent`.
pub fn classify(event: Event) -> Option<FormEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(FormEvent::Interrupt),
                // Ctrl+H is ASCII backspace
                (KeyModifiers::CONTROL, KeyCode::Char('h')) => Some(FormEvent::Erase),
                (_, KeyCode::Backspace | KeyCode::Delete) => Some(FormEvent::Erase),
                (_, KeyCode::Up | KeyCode::BackTab) => Some(FormEvent::Prev),
                (_, KeyCode::Down | KeyCode::Tab) => Some(FormEvent::Next),
                (_, KeyCode::Enter) => Some(FormEvent::Confirm),
                (modifiers, KeyCode::Char(c))
                    if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                        && is_printable(c) =>
                {
                    Some(FormEvent::Char(c))
                }
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(_) => Some(FormEvent::Mouse {
                row: mouse_event.row,
                col: mouse_event.column,
            }),
            _ => None,
        },
        _ => None,
    }
}

fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(classify(key(KeyCode::Up)), Some(FormEvent::Prev));
        assert_eq!(classify(key(KeyCode::BackTab)), Some(FormEvent::Prev));
        assert_eq!(classify(key(KeyCode::Down)), Some(FormEvent::Next));
        assert_eq!(classify(key(KeyCode::Tab)), Some(FormEvent::Next));
        assert_eq!(classify(key(KeyCode::Enter)), Some(FormEvent::Confirm));
    }

    #[test]
    fn test_erase_keys() {
        assert_eq!(classify(key(KeyCode::Backspace)), Some(FormEvent::Erase));
        assert_eq!(classify(key(KeyCode::Delete)), Some(FormEvent::Erase));
        let ctrl_h = Event::Key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));
        assert_eq!(classify(ctrl_h), Some(FormEvent::Erase));
    }

    #[test]
    fn test_printable_range() {
        assert_eq!(classify(key(KeyCode::Char(' '))), Some(FormEvent::Char(' ')));
        assert_eq!(classify(key(KeyCode::Char('~'))), Some(FormEvent::Char('~')));
        let shifted = Event::Key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(classify(shifted), Some(FormEvent::Char('A')));
        assert_eq!(classify(key(KeyCode::Char('é'))), None);
        let ctrl_a = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(classify(ctrl_a), None);
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(classify(ctrl_c), Some(FormEvent::Interrupt));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(classify(release), None);
    }

    #[test]
    fn test_mouse_press_only() {
        let mouse = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 12,
                row: 7,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            classify(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(FormEvent::Mouse { row: 7, col: 12 })
        );
        assert_eq!(classify(mouse(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(classify(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_resize_ignored() {
        assert_eq!(classify(Event::Resize(80, 24)), None);
    }
}
