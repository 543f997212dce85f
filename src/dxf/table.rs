/// A DXF layer table entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Layer {
    pub name: String,
    /// The AutoCAD Color Index (1-255).
    pub color: i16,
    /// The line type name, e.g. `CONTINUOUS` or `DASHED`.
    pub line_type: String,
    /// Frozen layers are neither visible nor plotted.
    pub frozen: bool,
    /// Locked layers are visible but not editable.
    pub locked: bool,
}

impl Layer {
    /// The layer's group 70 flag word: bit 0 frozen, bit 2 locked.
    pub(crate) fn standard_flags(&self) -> i16 {
        let mut flags = 0;
        if self.frozen {
            flags |= 1;
        }
        if self.locked {
            flags |= 4;
        }
        flags
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            name: String::from("0"),
            color: 7,
            line_type: String::from("CONTINUOUS"),
            frozen: false,
            locked: false,
        }
    }
}
