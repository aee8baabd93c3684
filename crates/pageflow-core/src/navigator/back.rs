impl<T: Toolkit, const N: usize> Navigator<T, N> {
    /// Returns to the page below the top of history.
    ///
    /// The departing page always gets unloaded once its disappear transition
    /// finishes. The revealed page animates with the departing page's options.
    /// Does nothing when fewer than two pages are in history. When the page
    /// below the top is the same page, only the reveal runs.
    pub fn back(&mut self) -> NavResult {
        let (Some(current_id), Some(prev_id)) = (self.history.top(), self.history.below_top())
        else {
            return Ok(());
        };

        self.ensure_idle(current_id)?;
        self.ensure_idle(prev_id)?;
        let leaving = current_id != prev_id;

        let current = self.router.get_mut(current_id)?;
        current.set_back(true);
        let obj = current.object();
        let options = current.options();
        let will_disappear = current.hooks.will_disappear;

        debug!(
            "pm-nav: back from page={} to page={} animation={:?} depth={}",
            current_id,
            prev_id,
            options.animation,
            self.history.len()
        );

        if leaving {
            if let Some(will_disappear) = will_disappear {
                will_disappear(&mut self.toolkit, obj);
            }
            self.start_transition(current_id, Completion::BackDisappear, options);
        }

        self.history.pop();

        let prev = self.router.get_mut(prev_id)?;
        prev.set_back(true);
        let prev_obj = prev.object();
        if let Some(will_appear) = prev.hooks.will_appear {
            will_appear(&mut self.toolkit, prev_obj);
        }
        self.toolkit.set_hidden(prev_obj, false);
        self.start_transition(prev_id, Completion::BackAppear, options);

        Ok(())
    }
}
