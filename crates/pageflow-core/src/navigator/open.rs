impl<T: Toolkit, const N: usize> Navigator<T, N> {
    /// Opens page `id`.
    ///
    /// The previous top page gets `will_disappear` and a disappear transition
    /// driven by the new page's options. The new page gets `on_load`, is shown,
    /// gets `will_appear`, then its appear transition. `did_appear` and
    /// `did_disappear` follow once the transitions finish.
    ///
    /// With `Target::Replace` the new page takes the previous page's history
    /// slot and the previous page is unloaded after it has left. Without
    /// `options` the page reuses the options it was last opened with.
    ///
    /// Reopening the page already on top skips the disappear leg, so the page
    /// stays on screen and only appears again.
    pub fn open_page(&mut self, id: PageId, options: Option<OpenOptions>) -> NavResult {
        self.router.get(id)?;
        if self.history.is_full() {
            return Err(NavError::HistoryFull);
        }

        let prev_id = self.history.top();
        let leaving = prev_id.filter(|&prev_id| prev_id != id);
        self.ensure_idle(id)?;
        if let Some(prev_id) = leaving {
            self.ensure_idle(prev_id)?;
        }

        let page = self.router.get_mut(id)?;
        if let Some(options) = options {
            page.set_options(options);
        }
        page.set_back(false);
        let page_options = page.options();
        let obj = page.object();
        let hooks = page.hooks;

        debug!(
            "pm-nav: open page={} prev={:?} animation={:?} target={:?} depth={}",
            id,
            prev_id,
            page_options.animation,
            options.map(|options| options.target),
            self.history.len()
        );

        if let Some(prev_id) = leaving {
            let prev = self.router.get_mut(prev_id)?;
            prev.set_back(false);
            let prev_obj = prev.object();
            if let Some(will_disappear) = prev.hooks.will_disappear {
                will_disappear(&mut self.toolkit, prev_obj);
            }
            self.start_transition(prev_id, Completion::Disappear, page_options);
        }

        (hooks.on_load)(&mut self.toolkit, obj);
        self.toolkit.set_hidden(obj, false);
        if let Some(will_appear) = hooks.will_appear {
            will_appear(&mut self.toolkit, obj);
        }
        self.start_transition(id, Completion::Appear, page_options);

        match options.map(|options| options.target) {
            Some(Target::Replace) => self.history.replace_top(id),
            _ => self.history.push(id),
        }
    }
}
