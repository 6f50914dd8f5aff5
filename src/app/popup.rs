use crate::{
    domain::PICKER_TYPES,
    form::{LineTarget, OutlineLine, RowPath},
    presentation::PopupRender,
};

/// Type picker opened over one outline line.
pub(crate) struct PopupState {
    path: RowPath,
    target: LineTarget,
    title: String,
    selected: usize,
}

impl PopupState {
    /// `None` for lines without a type (enum symbols).
    pub(crate) fn for_line(line: &OutlineLine) -> Option<Self> {
        let current = line.type_name.as_deref()?;
        let selected = PICKER_TYPES
            .iter()
            .position(|candidate| *candidate == current)
            .unwrap_or(0);
        Some(Self {
            path: line.path.clone(),
            target: line.target,
            title: format!("Type of {}", line.label),
            selected,
        })
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selected == 0 {
            self.selected = PICKER_TYPES.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        self.selected = (self.selected + 1) % PICKER_TYPES.len();
    }

    pub(crate) fn step(&mut self, delta: i32) {
        if delta < 0 {
            self.select_previous();
        } else if delta > 0 {
            self.select_next();
        }
    }

    pub(crate) fn selection(&self) -> &'static str {
        PICKER_TYPES[self.selected]
    }

    pub(crate) fn path(&self) -> &RowPath {
        &self.path
    }

    pub(crate) fn target(&self) -> LineTarget {
        self.target
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &PICKER_TYPES,
            selected: self.selected,
        }
    }
}

/// Name prompt for a record field or an enum symbol.
pub(crate) struct TextPrompt {
    path: RowPath,
    target: LineTarget,
    title: String,
    buffer: String,
}

impl TextPrompt {
    pub(crate) fn for_line(line: &OutlineLine, current: &str) -> Option<Self> {
        if !line.target.is_named() {
            return None;
        }
        let title = match line.target {
            LineTarget::Symbol(_) => "Symbol",
            _ => "Field name",
        };
        Some(Self {
            path: line.path.clone(),
            target: line.target,
            title: title.to_string(),
            buffer: current.to_string(),
        })
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub(crate) fn pop(&mut self) {
        self.buffer.pop();
    }

    pub(crate) fn path(&self) -> &RowPath {
        &self.path
    }

    pub(crate) fn target(&self) -> LineTarget {
        self.target
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn buffer(&self) -> &str {
        &self.buffer
    }
}
