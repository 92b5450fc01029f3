//! Listing state and the pagination machine
//!
//! Every listing, plain or keyed, is a [`ListSlot`]. The slot methods hold
//! the whole first-page / "more" state machine so the reducer only routes
//! actions to the right slot and turns [`PageOutcome`]s into effects.

use eh_client::{AppError, Gallery, ListPage, PageCursor, PageNumber, ToplistsType};
use std::collections::BTreeMap;

/// Most recent search keywords kept
pub const MAX_HISTORY_KEYWORDS: usize = 10;

/// Identifies one listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKey {
    Search,
    Frontpage,
    Popular,
    Watched,
    Favorites(i32),
    Toplists(ToplistsType),
}

/// What the reducer has to do after a page arrived
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Settled,
    /// Non-empty page that must be stored
    Persist(Vec<Gallery>),
    /// Empty page but later pages exist; fetch the next one
    GapSkip,
}

/// Loading, error and pagination state of one listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSlot {
    /// Unique by gid, in arrival order
    pub items: Vec<Gallery>,
    pub loading: bool,
    pub load_failed: bool,
    pub last_error: Option<AppError>,
    pub not_found: bool,
    pub page_number: PageNumber,
    pub more_loading: bool,
    pub more_load_failed: bool,
    /// Bumped by every accepted first-page fetch
    pub generation: u64,
}

impl ListSlot {
    /// Start a first-page fetch
    ///
    /// Returns `false` when a first-page fetch is already in flight.
    pub fn begin_fetch(&mut self) -> bool {
        self.not_found = false;
        self.load_failed = false;
        self.last_error = None;

        if self.loading {
            return false;
        }
        self.page_number.current = 0;
        self.loading = true;
        self.more_loading = false;
        self.more_load_failed = false;
        self.generation += 1;
        true
    }

    /// Apply the result of a first-page fetch; items are replaced wholesale
    pub fn finish_fetch(&mut self, result: &Result<ListPage, AppError>) -> PageOutcome {
        self.loading = false;

        match result {
            Ok(page) => {
                self.page_number = page.page_number;
                self.items = page.galleries.clone();

                if !page.galleries.is_empty() {
                    PageOutcome::Persist(page.galleries.clone())
                } else if page.page_number.has_next() {
                    PageOutcome::GapSkip
                } else {
                    self.not_found = true;
                    PageOutcome::Settled
                }
            }
            Err(error) => {
                self.load_failed = true;
                self.last_error = Some(error.clone());
                PageOutcome::Settled
            }
        }
    }

    /// Apply the result of a single-page listing
    ///
    /// An empty page marks the slot not found and keeps the old items.
    pub fn finish_single_page(&mut self, result: &Result<ListPage, AppError>) -> PageOutcome {
        self.loading = false;

        match result {
            Ok(page) if page.galleries.is_empty() => {
                self.not_found = true;
                PageOutcome::Settled
            }
            Ok(page) => {
                self.items = page.galleries.clone();
                PageOutcome::Persist(page.galleries.clone())
            }
            Err(error) => {
                self.load_failed = true;
                self.last_error = Some(error.clone());
                PageOutcome::Settled
            }
        }
    }

    /// Start a "more" fetch
    ///
    /// Returns the cursor for the next page, or `None` when the listing is
    /// exhausted or a "more" fetch is already in flight.
    pub fn begin_fetch_more(&mut self) -> Option<PageCursor> {
        self.more_load_failed = false;

        let next = self
            .page_number
            .current
            .checked_add(1)
            .filter(|next| *next <= self.page_number.maximum)?;
        if self.more_loading {
            return None;
        }
        self.more_loading = true;

        let last_id = self
            .items
            .last()
            .map(|gallery| gallery.gid.clone())
            .unwrap_or_default();
        Some(PageCursor::new(last_id, next))
    }

    /// Apply the result of a "more" fetch; unseen items are appended
    ///
    /// A result started in an older `generation` belongs to a list that has
    /// been reset since and leaves the slot untouched.
    pub fn finish_fetch_more(
        &mut self,
        generation: u64,
        result: &Result<ListPage, AppError>,
    ) -> PageOutcome {
        if generation != self.generation {
            log::debug!(
                "Discarding page of generation {} (list is at {})",
                generation,
                self.generation
            );
            return PageOutcome::Settled;
        }
        self.more_loading = false;

        match result {
            Ok(page) => {
                let current = self.page_number.current.max(page.page_number.current);
                self.page_number = PageNumber::new(current, page.page_number.maximum);
                self.merge_items(&page.galleries);

                if page.galleries.is_empty() && self.page_number.has_next() {
                    return PageOutcome::GapSkip;
                }
                if self.items.is_empty() {
                    self.not_found = true;
                }
                if page.galleries.is_empty() {
                    PageOutcome::Settled
                } else {
                    PageOutcome::Persist(page.galleries.clone())
                }
            }
            Err(_) => {
                self.more_load_failed = true;
                PageOutcome::Settled
            }
        }
    }

    /// Append galleries whose gid is not in the list yet
    pub fn merge_items(&mut self, galleries: &[Gallery]) {
        for gallery in galleries {
            if !self.items.contains(gallery) {
                self.items.push(gallery.clone());
            }
        }
    }
}

/// A family of listings keyed by folder or ranking
///
/// An absent key means the listing was never fetched, which is different
/// from a present slot with all flags `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedLists<K: Ord> {
    slots: BTreeMap<K, ListSlot>,
}

impl<K: Ord> Default for KeyedLists<K> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> KeyedLists<K> {
    pub fn get(&self, key: K) -> Option<&ListSlot> {
        self.slots.get(&key)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut ListSlot> {
        self.slots.get_mut(&key)
    }

    /// Slot for `key`, created on first use
    pub fn entry(&mut self, key: K) -> &mut ListSlot {
        self.slots.entry(key).or_default()
    }

    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(&key)
    }

    pub fn is_loading(&self, key: K) -> bool {
        self.get(key).is_some_and(|slot| slot.loading)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub search_keyword: String,
    pub search: ListSlot,
    pub frontpage: ListSlot,
    pub popular: ListSlot,
    pub watched: ListSlot,
    pub favorites: KeyedLists<i32>,
    pub toplists: KeyedLists<ToplistsType>,
    /// Oldest first
    pub history_keywords: Vec<String>,
}

impl HomeState {
    pub fn slot(&self, key: ListKey) -> Option<&ListSlot> {
        match key {
            ListKey::Search => Some(&self.search),
            ListKey::Frontpage => Some(&self.frontpage),
            ListKey::Popular => Some(&self.popular),
            ListKey::Watched => Some(&self.watched),
            ListKey::Favorites(index) => self.favorites.get(index),
            ListKey::Toplists(toplists_type) => self.toplists.get(toplists_type),
        }
    }

    /// Slot for `key`, creating keyed slots on first use
    pub fn slot_mut(&mut self, key: ListKey) -> &mut ListSlot {
        match key {
            ListKey::Search => &mut self.search,
            ListKey::Frontpage => &mut self.frontpage,
            ListKey::Popular => &mut self.popular,
            ListKey::Watched => &mut self.watched,
            ListKey::Favorites(index) => self.favorites.entry(index),
            ListKey::Toplists(toplists_type) => self.toplists.entry(toplists_type),
        }
    }

    /// Slot for `key` without creating keyed slots
    pub fn existing_slot_mut(&mut self, key: ListKey) -> Option<&mut ListSlot> {
        match key {
            ListKey::Favorites(index) => self.favorites.get_mut(index),
            ListKey::Toplists(toplists_type) => self.toplists.get_mut(toplists_type),
            _ => Some(self.slot_mut(key)),
        }
    }

    /// Record a search keyword, most recent last
    ///
    /// Empty keywords are ignored. A known keyword moves to the end; the
    /// oldest ones are dropped beyond [`MAX_HISTORY_KEYWORDS`].
    pub fn insert_history_keyword(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.history_keywords.retain(|keyword| keyword != text);
        self.history_keywords.push(text.to_string());

        let overflow = self
            .history_keywords
            .len()
            .saturating_sub(MAX_HISTORY_KEYWORDS);
        if overflow > 0 {
            self.history_keywords.drain(..overflow);
        }
    }
}
