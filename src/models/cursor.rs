/// Per-operator running odometer: the start of the next fill-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionCursor {
    pub last_odometer: f64,
}

impl SessionCursor {
    pub fn start(odometer: f64) -> Self {
        Self {
            last_odometer: odometer,
        }
    }

    /// Cursor after a successful fill-up ending at `odometer_end`.
    pub fn advance(self, odometer_end: f64) -> Self {
        Self {
            last_odometer: odometer_end,
        }
    }
}
