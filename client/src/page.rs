//! Page-at-a-time traversal over paginated listing endpoints.

use std::marker::PhantomData;

use http::Method;
use tracing::debug;
use url::Url;

use crate::client::RequestRunner;
use crate::{PageResponse, Paging, Result};

/// Walks a paginated listing one page per call, in either direction.
///
/// Construction seeds the cursor with the fully built starting URL
/// (filters and page-size hint already encoded); every successful fetch
/// replaces the cursor wholesale with the `paging` links the server
/// returned. The iterator never rebuilds a listing URL itself — the server
/// may encode signed or stateful continuation tokens in its links, so
/// they are followed verbatim.
///
/// Each traversal method resolves to one of three outcomes:
///
/// - `Ok(Some(items))`: a page was fetched and decoded. `items` may be
///   empty when the server returns a sparse page that still links onward;
///   keep iterating.
/// - `Ok(None)`: no link exists in that direction — the listing is
///   exhausted. Calling again is a no-op, but the opposite direction stays
///   available through its own link.
/// - `Err(_)`: the fetch failed. The cursor does not move on failure, so
///   calling the same method again retries the same page.
///
/// ```no_run
/// # use mailroom_client::{mailing_lists, Client};
/// # async fn demo(client: Client) -> mailroom_client::Result<()> {
/// let mut it = mailing_lists::list(&client, None)?;
/// while let Some(page) = it.next_page().await? {
///     for list in page {
///         println!("{}", list.address);
///     }
/// }
/// # Ok(())
/// # }
/// ```
///
/// An iterator takes `&mut self` per operation and is meant for a single
/// consumer; clone the [`crate::Client`] and build one iterator per task
/// for concurrent traversals.
pub struct PageIterator<'c, C, P> {
    runner: &'c C,
    paging: Paging,
    _response: PhantomData<fn() -> P>,
}

impl<'c, C, P> PageIterator<'c, C, P>
where
    C: RequestRunner,
    P: PageResponse,
{
    /// Binds an iterator to a fully built starting URL.
    pub(crate) fn new(runner: &'c C, start: Url) -> Self {
        Self {
            runner,
            paging: Paging::seed(start),
            _response: PhantomData,
        }
    }

    /// The navigation links of the most recently fetched page, or the
    /// seeded links if nothing has been fetched yet.
    pub fn paging(&self) -> &Paging {
        &self.paging
    }

    /// Fetches the page after the last one returned, or the first page of
    /// the listing if nothing has been fetched yet.
    pub async fn next_page(&mut self) -> Result<Option<Vec<P::Item>>> {
        let link = self.paging.next_link().map(str::to_owned);
        self.fetch(link).await
    }

    /// Fetches the page before the last one returned.
    pub async fn prev_page(&mut self) -> Result<Option<Vec<P::Item>>> {
        let link = self.paging.previous_link().map(str::to_owned);
        self.fetch(link).await
    }

    /// Jumps to the start of the listing.
    pub async fn first_page(&mut self) -> Result<Option<Vec<P::Item>>> {
        let link = self.paging.first_link().map(str::to_owned);
        self.fetch(link).await
    }

    /// Jumps to the end of the listing, once the server has advertised
    /// where that is. Before any page has been fetched the bound is
    /// unknown and this resolves to `Ok(None)`.
    pub async fn last_page(&mut self) -> Result<Option<Vec<P::Item>>> {
        let link = self.paging.last_link().map(str::to_owned);
        self.fetch(link).await
    }

    async fn fetch(
        &mut self,
        link: Option<String>,
    ) -> Result<Option<Vec<P::Item>>> {
        let Some(link) = link else {
            return Ok(None);
        };
        let url = Url::parse(&link)?;
        debug!("Fetching page '{}'", url);
        let response = self.runner.run::<P>(Method::GET, url).await?;
        let page = response.into_inner()?;
        // Only a successful fetch moves the cursor; a failed one leaves
        // it pointing at the page that failed.
        self.paging = page.paging().clone();
        Ok(Some(page.into_items()))
    }
}
