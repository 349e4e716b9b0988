/// Semantic tone of a rendered cell; the UI layer maps tones to colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellTone {
    #[default]
    Default,
    /// De-emphasized secondary text (namespaces, IPs, ages).
    Muted,
    /// Emphasized primary text (resource names).
    Strong,
    Success,
    Warning,
    Error,
}

/// A rendered cell: display text plus its tone.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    pub text: String,
    pub tone: CellTone,
}

impl TableCell {
    pub fn new(text: impl Into<String>, tone: CellTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, CellTone::Default)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, CellTone::Muted)
    }

    /// Muted text with a `—` placeholder for absent values. Callers own the
    /// placeholder convention, not the engine.
    pub fn muted_or_dash(text: &str) -> Self {
        if text.is_empty() {
            Self::muted("—")
        } else {
            Self::muted(text)
        }
    }
}

pub type RenderFn<R> = fn(&R) -> TableCell;

/// Describes one table column. Columns are immutable inputs from the resource
/// page; the engine only reorders, hides and resizes them.
pub struct Column<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub default_hidden: bool,
    /// Custom cell renderer; falls back to the resource's display accessor.
    pub render: Option<RenderFn<R>>,
}

impl<R> Column<R> {
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: false,
            default_hidden: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn default_hidden(mut self) -> Self {
        self.default_hidden = true;
        self
    }

    pub fn render(mut self, f: RenderFn<R>) -> Self {
        self.render = Some(f);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionVariant {
    #[default]
    Default,
    Destructive,
}

/// A per-row action rendered in the row's menu. Invoking `on_click` is the
/// engine's only interaction with row-level logic; the actions themselves
/// are stubs in this console.
pub struct RowAction<R> {
    pub label: &'static str,
    pub variant: ActionVariant,
    pub on_click: fn(&R),
}

impl<R> RowAction<R> {
    pub fn new(label: &'static str, on_click: fn(&R)) -> Self {
        Self {
            label,
            variant: ActionVariant::Default,
            on_click,
        }
    }

    pub fn destructive(label: &'static str, on_click: fn(&R)) -> Self {
        Self {
            label,
            variant: ActionVariant::Destructive,
            on_click,
        }
    }
}
