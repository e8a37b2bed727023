use http::Method;

use crate::client::RequestRunner;
use crate::{
    MailingList,
    MailingListsPage,
    MessageResponse,
    PageIterator,
    Pagination,
    Response,
    Result,
    UpdateMailingList,
};

/// Create a new mailing list.
pub async fn create(
    client: &impl RequestRunner,
    list: &MailingList,
) -> Result<Response<MailingList>> {
    let path = client.make_url("/v1/lists")?;
    client.run_with_body(Method::POST, path, list).await
}

/// Retrieve a mailing list by address.
pub async fn get<T>(
    client: &impl RequestRunner,
    address: T,
) -> Result<Response<MailingList>>
where
    T: AsRef<str>,
{
    let path = client.make_url(&format!("/v1/lists/{}", address.as_ref()))?;
    client.run(Method::GET, path).await
}

/// Update a mailing list in place.
pub async fn update<T>(
    client: &impl RequestRunner,
    address: T,
    update: &UpdateMailingList,
) -> Result<Response<MailingList>>
where
    T: AsRef<str>,
{
    let path = client.make_url(&format!("/v1/lists/{}", address.as_ref()))?;
    client.run_with_body(Method::PUT, path, update).await
}

/// Permanently delete a mailing list and its members.
pub async fn delete<T>(
    client: &impl RequestRunner,
    address: T,
) -> Result<Response<MessageResponse>>
where
    T: AsRef<str>,
{
    let path = client.make_url(&format!("/v1/lists/{}", address.as_ref()))?;
    client.run(Method::DELETE, path).await
}

/// Retrieve mailing lists, one page at a time.
pub fn list<C>(
    client: &C,
    pagination: Option<Pagination>,
) -> Result<PageIterator<'_, C, MailingListsPage>>
where
    C: RequestRunner,
{
    let mut path = client.make_url("/v1/lists")?;
    if let Some(pagination) = pagination {
        if let Some(limit) = pagination.limit {
            path.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
    }

    Ok(PageIterator::new(client, path))
}
