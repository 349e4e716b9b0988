//! Transient drag/resize interaction episodes.
//!
//! A gesture begins on pointer-down (or keyboard grab), is updated while the
//! pointer moves, and ends on drop. The session lives in a single `Option`
//! slot: every exit path — drop, Esc, focus loss, a pointer-up with no
//! target — takes the slot, so a session can never leak into the next
//! interaction.

/// Columns never shrink below this many terminal cells.
pub const MIN_COLUMN_WIDTH: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Live column resize: the width tracks the pointer on every move.
    ResizeColumn {
        key: String,
        origin_x: u16,
        origin_width: u16,
    },
    /// Column drag within the selector: nothing is applied until the drop.
    DragColumn {
        key: String,
        from: usize,
        over: usize,
    },
}

/// What a gesture asks the table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEffect {
    SetWidth { key: String, width: u16 },
    Reorder { from: usize, to: usize },
}

#[derive(Debug, Default)]
pub struct GestureSession {
    active: Option<Gesture>,
}

impl GestureSession {
    pub fn begin(&mut self, gesture: Gesture) {
        if self.active.is_some() {
            // A stale session means some exit path was missed upstream;
            // starting over is still safe because nothing was applied.
            tracing::warn!("beginning a gesture while another was active");
        }
        self.active = Some(gesture);
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    /// Pointer moved to `x`. Resizes apply immediately; drags only track the
    /// hovered position.
    pub fn update_pointer(&mut self, x: u16) -> Option<GestureEffect> {
        match self.active.as_ref()? {
            Gesture::ResizeColumn {
                key,
                origin_x,
                origin_width,
            } => Some(GestureEffect::SetWidth {
                key: key.clone(),
                width: resize_width(*origin_width, *origin_x, x),
            }),
            Gesture::DragColumn { .. } => None,
        }
    }

    /// Drag hover moved over entry `index`.
    pub fn update_target(&mut self, index: usize) {
        if let Some(Gesture::DragColumn { over, .. }) = self.active.as_mut() {
            *over = index;
        }
    }

    /// Ends the gesture. A resize has already applied its width on every
    /// pointer move, so ending it is pure cleanup; a drag dropped on its own
    /// position is a no-op.
    pub fn end(&mut self) -> Option<GestureEffect> {
        match self.active.take()? {
            Gesture::ResizeColumn { .. } => None,
            Gesture::DragColumn { from, over, .. } => {
                if from == over {
                    None
                } else {
                    Some(GestureEffect::Reorder { from, to: over })
                }
            }
        }
    }

    /// Abandons the gesture with no effect: the pointer left without a drop,
    /// the user pressed Esc, or the terminal lost focus.
    pub fn abandon(&mut self) {
        self.active = None;
    }
}

fn resize_width(origin_width: u16, origin_x: u16, pointer_x: u16) -> u16 {
    let delta = pointer_x as i32 - origin_x as i32;
    (origin_width as i32 + delta).max(MIN_COLUMN_WIDTH as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_follows_pointer() {
        let mut session = GestureSession::default();
        session.begin(Gesture::ResizeColumn {
            key: "name".into(),
            origin_x: 40,
            origin_width: 20,
        });

        assert_eq!(
            session.update_pointer(50),
            Some(GestureEffect::SetWidth {
                key: "name".into(),
                width: 30
            })
        );
        assert_eq!(
            session.update_pointer(30),
            Some(GestureEffect::SetWidth {
                key: "name".into(),
                width: 10
            })
        );
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut session = GestureSession::default();
        session.begin(Gesture::ResizeColumn {
            key: "name".into(),
            origin_x: 40,
            origin_width: 20,
        });

        assert_eq!(
            session.update_pointer(0),
            Some(GestureEffect::SetWidth {
                key: "name".into(),
                width: MIN_COLUMN_WIDTH
            })
        );
    }

    #[test]
    fn test_drag_applies_only_on_drop() {
        let mut session = GestureSession::default();
        session.begin(Gesture::DragColumn {
            key: "status".into(),
            from: 2,
            over: 2,
        });

        assert_eq!(session.update_pointer(10), None);
        session.update_target(0);

        assert_eq!(session.end(), Some(GestureEffect::Reorder { from: 2, to: 0 }));
        assert!(!session.is_active());
    }

    #[test]
    fn test_drop_in_place_is_noop() {
        let mut session = GestureSession::default();
        session.begin(Gesture::DragColumn {
            key: "status".into(),
            from: 1,
            over: 1,
        });
        assert_eq!(session.end(), None);
    }

    #[test]
    fn test_abandon_discards_everything() {
        let mut session = GestureSession::default();
        session.begin(Gesture::DragColumn {
            key: "status".into(),
            from: 1,
            over: 3,
        });
        session.abandon();

        assert!(!session.is_active());
        assert_eq!(session.end(), None);
        assert_eq!(session.update_pointer(99), None);
    }
}
