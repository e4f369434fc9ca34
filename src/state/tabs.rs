//! Tab container: ordered header/content pairs with one active pane

/// A clickable tab header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHeader {
    pub name: String,
    pub active: bool,
    pub visible: bool,
}

/// The pane belonging to a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContent<P> {
    pub pane: P,
    pub active: bool,
    pub visible: bool,
}

/// Shows exactly one of several panes at a time.
///
/// `headers[i]` belongs to `contents[i]`.
#[derive(Debug, Clone)]
pub struct Tabs<P> {
    headers: Vec<TabHeader>,
    contents: Vec<TabContent<P>>,
    rendered: bool,
}

impl<P> Default for Tabs<P> {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            contents: Vec::new(),
            rendered: false,
        }
    }
}

impl<P> Tabs<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tab and return its header index
    pub fn add_tab(&mut self, name: &str, content: P) -> usize {
        self.headers.push(TabHeader {
            name: name.to_string(),
            active: false,
            visible: true,
        });
        self.contents.push(TabContent {
            pane: content,
            active: false,
            visible: true,
        });
        self.headers.len() - 1
    }

    /// Finish setup and activate the first tab
    pub fn render(&mut self) {
        self.rendered = true;
        if !self.headers.is_empty() {
            self.select(0);
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Activate tab `index`, hiding every other pane.
    ///
    /// Ignored while headers are hidden or when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.contents.len() || !self.headers_visible() {
            return false;
        }

        for content in &mut self.contents {
            content.visible = false;
            content.active = false;
        }
        for header in &mut self.headers {
            header.active = false;
        }

        self.contents[index].active = true;
        self.contents[index].visible = true;
        self.headers[index].active = true;
        tracing::debug!(tab = %self.headers[index].name, "tab selected");
        true
    }

    /// Select the tab after the active one, wrapping around
    pub fn next(&mut self) -> bool {
        match self.active_index() {
            Some(i) => self.select((i + 1) % self.len()),
            None => self.select(0),
        }
    }

    /// Select the tab before the active one, wrapping around
    pub fn prev(&mut self) -> bool {
        match self.active_index() {
            Some(0) => self.select(self.len().saturating_sub(1)),
            Some(i) => self.select(i - 1),
            None => self.select(0),
        }
    }

    /// Show the tabbed view, or hide headers and expand every pane.
    ///
    /// The active tab is remembered either way.
    pub fn show(&mut self, show: bool) {
        for header in &mut self.headers {
            header.visible = show;
        }
        for content in &mut self.contents {
            content.visible = !show || content.active;
        }
    }

    pub fn headers_visible(&self) -> bool {
        self.headers.iter().all(|h| h.visible)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.contents.iter().position(|c| c.active)
    }

    pub fn active_pane(&self) -> Option<&P> {
        self.contents.iter().find(|c| c.active).map(|c| &c.pane)
    }

    /// Panes currently on screen, in tab order
    pub fn visible_panes(&self) -> impl Iterator<Item = &P> {
        self.contents.iter().filter(|c| c.visible).map(|c| &c.pane)
    }

    pub fn headers(&self) -> &[TabHeader] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_tabs() -> Tabs<&'static str> {
        let mut tabs = Tabs::new();
        tabs.add_tab("One", "first");
        tabs.add_tab("Two", "second");
        tabs.add_tab("Three", "third");
        tabs
    }

    fn active_flags(tabs: &Tabs<&'static str>) -> Vec<bool> {
        tabs.contents.iter().map(|c| c.active).collect()
    }

    #[test]
    fn test_add_tab_returns_index() {
        let mut tabs = Tabs::new();
        assert_eq!(tabs.add_tab("A", 1), 0);
        assert_eq!(tabs.add_tab("B", 2), 1);
        assert_eq!(tabs.len(), 2);
    }

    #[test]
    fn test_nothing_active_before_render() {
        let tabs = three_tabs();
        assert!(!tabs.is_rendered());
        assert_eq!(tabs.active_index(), None);
    }

    #[test]
    fn test_render_activates_first_tab() {
        let mut tabs = three_tabs();
        tabs.render();
        assert!(tabs.is_rendered());
        assert_eq!(tabs.active_index(), Some(0));
        assert_eq!(tabs.active_pane(), Some(&"first"));
        assert_eq!(tabs.visible_panes().collect::<Vec<_>>(), vec![&"first"]);
    }

    #[test]
    fn test_render_empty_is_noop() {
        let mut tabs: Tabs<u8> = Tabs::new();
        tabs.render();
        assert!(tabs.is_empty());
        assert_eq!(tabs.active_index(), None);
    }

    #[test]
    fn test_select_makes_single_pane_active() {
        let mut tabs = three_tabs();
        tabs.render();
        for i in 0..3 {
            assert!(tabs.select(i));
            let expected: Vec<bool> = (0..3).map(|j| j == i).collect();
            assert_eq!(active_flags(&tabs), expected);
            let header_flags: Vec<bool> = tabs.headers().iter().map(|h| h.active).collect();
            assert_eq!(header_flags, expected);
            assert_eq!(tabs.visible_panes().count(), 1);
        }
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut tabs = three_tabs();
        tabs.render();
        tabs.select(1);
        assert!(!tabs.select(5));
        assert_eq!(tabs.active_index(), Some(1));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut tabs = three_tabs();
        tabs.render();
        tabs.prev();
        assert_eq!(tabs.active_index(), Some(2));
        tabs.next();
        assert_eq!(tabs.active_index(), Some(0));
        tabs.next();
        assert_eq!(tabs.active_index(), Some(1));
    }

    #[test]
    fn test_hide_expands_all_panes_and_keeps_active() {
        let mut tabs = three_tabs();
        tabs.render();
        tabs.select(2);

        tabs.show(false);

        assert!(!tabs.headers_visible());
        assert_eq!(tabs.visible_panes().count(), 3);
        assert_eq!(tabs.active_index(), Some(2));
    }

    #[test]
    fn test_show_restores_active_pane_only() {
        let mut tabs = three_tabs();
        tabs.render();
        tabs.select(1);
        tabs.show(false);

        tabs.show(true);

        assert!(tabs.headers_visible());
        assert_eq!(tabs.visible_panes().collect::<Vec<_>>(), vec![&"second"]);
        assert_eq!(tabs.active_index(), Some(1));
    }

    #[test]
    fn test_select_ignored_while_headers_hidden() {
        let mut tabs = three_tabs();
        tabs.render();
        tabs.show(false);
        assert!(!tabs.select(1));
        assert_eq!(tabs.active_index(), Some(0));
        assert_eq!(tabs.visible_panes().count(), 3);
    }
}
