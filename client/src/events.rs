use crate::client::RequestRunner;
use crate::{EventsFilter, EventsPage, PageIterator, Pagination, Result};

/// Retrieve a domain's message events, one page at a time. The stream is
/// newest-first unless the filter asks for ascending order.
///
/// Filters are encoded into the first request only; the server carries
/// them through the paging links it returns.
pub fn list<C, T>(
    client: &C,
    domain: T,
    pagination: Option<Pagination>,
    filter: Option<EventsFilter>,
) -> Result<PageIterator<'_, C, EventsPage>>
where
    C: RequestRunner,
    T: AsRef<str>,
{
    let mut path = client
        .make_url(&format!("/v1/domains/{}/events", domain.as_ref()))?;
    if let Some(pagination) = pagination {
        if let Some(limit) = pagination.limit {
            path.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
    }

    if let Some(filter) = filter {
        if let Some(begin) = filter.begin {
            path.query_pairs_mut()
                .append_pair("begin", &begin.to_rfc3339());
        }
        if let Some(end) = filter.end {
            path.query_pairs_mut().append_pair("end", &end.to_rfc3339());
        }
        if let Some(ascending) = filter.ascending {
            path.query_pairs_mut()
                .append_pair("ascending", if ascending { "yes" } else { "no" });
        }
        for event in filter.event {
            path.query_pairs_mut()
                .append_pair("event", &event.to_string());
        }
    }

    Ok(PageIterator::new(client, path))
}
