//! Fixed-capacity registry mapping page IDs to pages.

use log::{debug, warn};

use crate::{
    NavError, NavResult,
    page::{Page, PageId},
    toolkit::{self, Toolkit},
};

pub struct Router<T: Toolkit, const N: usize> {
    pages: [Option<Page<T>>; N],
}

impl<T: Toolkit, const N: usize> Default for Router<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Toolkit, const N: usize> Router<T, N> {
    pub fn new() -> Self {
        Self {
            pages: core::array::from_fn(|_| None),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Unregisters every page. Toolkit objects are left to the toolkit.
    pub fn clear(&mut self) {
        for page in &mut self.pages {
            *page = None;
        }
    }

    /// Creates a hidden, full-screen page object and registers it at `id`.
    pub fn create_page(&mut self, toolkit: &mut T, id: PageId) -> NavResult<&mut Page<T>> {
        let slot = self
            .pages
            .get_mut(id as usize)
            .ok_or(NavError::InvalidPageId)?;
        if slot.is_some() {
            return Err(NavError::PageAlreadyRegistered);
        }

        let obj = toolkit.create_object().map_err(|err| {
            warn!("pm-nav: create page={} failed err={:?}", id, err);
            NavError::Allocation
        })?;

        toolkit::reset_style(toolkit, obj);
        toolkit.set_hidden(obj, true);
        let resolution = toolkit.resolution();
        toolkit.set_size(obj, resolution.width, resolution.height);

        debug!(
            "pm-nav: created page={} obj={:?} size={}x{}",
            id, obj, resolution.width, resolution.height
        );
        Ok(slot.insert(Page::new(obj)))
    }

    pub fn contains(&self, id: PageId) -> bool {
        matches!(self.pages.get(id as usize), Some(Some(_)))
    }

    pub fn get(&self, id: PageId) -> NavResult<&Page<T>> {
        self.pages
            .get(id as usize)
            .ok_or(NavError::InvalidPageId)?
            .as_ref()
            .ok_or(NavError::PageNotRegistered)
    }

    pub fn get_mut(&mut self, id: PageId) -> NavResult<&mut Page<T>> {
        self.pages
            .get_mut(id as usize)
            .ok_or(NavError::InvalidPageId)?
            .as_mut()
            .ok_or(NavError::PageNotRegistered)
    }
}
