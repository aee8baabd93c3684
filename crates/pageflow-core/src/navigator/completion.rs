impl<T: Toolkit, const N: usize> Navigator<T, N> {
    /// Runs what is left of a page's lifecycle after its transition.
    fn finish(&mut self, context: TransitionContext) {
        let Ok(page) = self.router.get(context.page) else {
            warn!(
                "pm-nav: completion for unregistered page={} {:?}",
                context.page, context.completion
            );
            return;
        };
        let obj = page.object();
        let hooks = page.hooks;

        debug!(
            "pm-nav: finish page={} {:?}",
            context.page, context.completion
        );

        match context.completion {
            Completion::Appear | Completion::BackAppear => {
                if let Some(did_appear) = hooks.did_appear {
                    did_appear(&mut self.toolkit, obj);
                }
            }
            Completion::Disappear => {
                // popups leave the page underneath on screen
                if context.options.animation != AnimationKind::Popup {
                    self.toolkit.set_hidden(obj, true);
                }
                if let Some(did_disappear) = hooks.did_disappear {
                    did_disappear(&mut self.toolkit, obj);
                }
                if context.options.target == Target::Replace {
                    (hooks.un_load)(&mut self.toolkit, obj);
                    self.toolkit.clean(obj);
                }
            }
            Completion::BackDisappear => {
                self.toolkit.set_hidden(obj, true);
                if let Some(did_disappear) = hooks.did_disappear {
                    did_disappear(&mut self.toolkit, obj);
                }
                (hooks.un_load)(&mut self.toolkit, obj);
                self.toolkit.clean(obj);
            }
        }
    }
}
