use http::Method;

use crate::client::RequestRunner;
use crate::{
    Member,
    MembersFilter,
    MembersPage,
    MessageResponse,
    NewMembers,
    PageIterator,
    Pagination,
    Response,
    Result,
    UpdateMember,
};

/// Add a member to a mailing list. With `upsert` set, an existing member
/// with the same address is updated instead of rejected.
pub async fn create<T>(
    client: &impl RequestRunner,
    list_address: T,
    member: &Member,
    upsert: bool,
) -> Result<Response<Member>>
where
    T: AsRef<str>,
{
    let mut path = client
        .make_url(&format!("/v1/lists/{}/members", list_address.as_ref()))?;
    if upsert {
        path.query_pairs_mut().append_pair("upsert", "yes");
    }

    client.run_with_body(Method::POST, path, member).await
}

/// Add a batch of members in one request. The endpoint accepts at most
/// 1000 members per call; batch larger imports client-side.
pub async fn add_many<T>(
    client: &impl RequestRunner,
    list_address: T,
    members: Vec<Member>,
    upsert: bool,
) -> Result<Response<MessageResponse>>
where
    T: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/lists/{}/members/bulk",
        list_address.as_ref()
    ))?;
    let body = NewMembers { members, upsert };

    client.run_with_body(Method::POST, path, body).await
}

/// Retrieve a single member of a mailing list.
pub async fn get<T, M>(
    client: &impl RequestRunner,
    list_address: T,
    member_address: M,
) -> Result<Response<Member>>
where
    T: AsRef<str>,
    M: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/lists/{}/members/{}",
        list_address.as_ref(),
        member_address.as_ref()
    ))?;

    client.run(Method::GET, path).await
}

/// Update a member in place.
pub async fn update<T, M>(
    client: &impl RequestRunner,
    list_address: T,
    member_address: M,
    update: &UpdateMember,
) -> Result<Response<Member>>
where
    T: AsRef<str>,
    M: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/lists/{}/members/{}",
        list_address.as_ref(),
        member_address.as_ref()
    ))?;

    client.run_with_body(Method::PUT, path, update).await
}

/// Remove a member from a mailing list.
pub async fn delete<T, M>(
    client: &impl RequestRunner,
    list_address: T,
    member_address: M,
) -> Result<Response<MessageResponse>>
where
    T: AsRef<str>,
    M: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/lists/{}/members/{}",
        list_address.as_ref(),
        member_address.as_ref()
    ))?;

    client.run(Method::DELETE, path).await
}

/// Retrieve the members of a mailing list, one page at a time.
pub fn list<C, T>(
    client: &C,
    list_address: T,
    pagination: Option<Pagination>,
    filter: Option<MembersFilter>,
) -> Result<PageIterator<'_, C, MembersPage>>
where
    C: RequestRunner,
    T: AsRef<str>,
{
    let mut path = client
        .make_url(&format!("/v1/lists/{}/members", list_address.as_ref()))?;
    if let Some(pagination) = pagination {
        if let Some(limit) = pagination.limit {
            path.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
    }

    if let Some(filter) = filter {
        if let Some(subscribed) = filter.subscribed {
            path.query_pairs_mut()
                .append_pair("subscribed", &subscribed.to_string());
        }
    }

    Ok(PageIterator::new(client, path))
}
