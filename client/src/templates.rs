use http::Method;

use crate::client::RequestRunner;
use crate::{
    MessageResponse,
    PageIterator,
    Pagination,
    Response,
    Result,
    Template,
    TemplateVersion,
    TemplateVersionsPage,
    UpdateTemplate,
    UpdateTemplateVersion,
};

/// Create a new stored template. The initial version, if any, is added
/// separately with [`create_version`].
pub async fn create<D>(
    client: &impl RequestRunner,
    domain: D,
    template: &Template,
) -> Result<Response<Template>>
where
    D: AsRef<str>,
{
    let path = client
        .make_url(&format!("/v1/domains/{}/templates", domain.as_ref()))?;
    client.run_with_body(Method::POST, path, template).await
}

/// Retrieve a template by name.
pub async fn get<D, T>(
    client: &impl RequestRunner,
    domain: D,
    name: T,
) -> Result<Response<Template>>
where
    D: AsRef<str>,
    T: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}",
        domain.as_ref(),
        name.as_ref()
    ))?;

    client.run(Method::GET, path).await
}

/// Update a template's metadata in place.
pub async fn update<D, T>(
    client: &impl RequestRunner,
    domain: D,
    name: T,
    update: &UpdateTemplate,
) -> Result<Response<Template>>
where
    D: AsRef<str>,
    T: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}",
        domain.as_ref(),
        name.as_ref()
    ))?;

    client.run_with_body(Method::PUT, path, update).await
}

/// Permanently delete a template and all of its versions.
pub async fn delete<D, T>(
    client: &impl RequestRunner,
    domain: D,
    name: T,
) -> Result<Response<MessageResponse>>
where
    D: AsRef<str>,
    T: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}",
        domain.as_ref(),
        name.as_ref()
    ))?;

    client.run(Method::DELETE, path).await
}

/// Add a version to a template.
pub async fn create_version<D, T>(
    client: &impl RequestRunner,
    domain: D,
    template_name: T,
    version: &TemplateVersion,
) -> Result<Response<TemplateVersion>>
where
    D: AsRef<str>,
    T: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}/versions",
        domain.as_ref(),
        template_name.as_ref()
    ))?;

    client.run_with_body(Method::POST, path, version).await
}

/// Retrieve a single template version by tag.
pub async fn get_version<D, T, V>(
    client: &impl RequestRunner,
    domain: D,
    template_name: T,
    tag: V,
) -> Result<Response<TemplateVersion>>
where
    D: AsRef<str>,
    T: AsRef<str>,
    V: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}/versions/{}",
        domain.as_ref(),
        template_name.as_ref(),
        tag.as_ref()
    ))?;

    client.run(Method::GET, path).await
}

/// Update a template version in place.
pub async fn update_version<D, T, V>(
    client: &impl RequestRunner,
    domain: D,
    template_name: T,
    tag: V,
    update: &UpdateTemplateVersion,
) -> Result<Response<TemplateVersion>>
where
    D: AsRef<str>,
    T: AsRef<str>,
    V: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}/versions/{}",
        domain.as_ref(),
        template_name.as_ref(),
        tag.as_ref()
    ))?;

    client.run_with_body(Method::PUT, path, update).await
}

/// Delete a single version of a template.
pub async fn delete_version<D, T, V>(
    client: &impl RequestRunner,
    domain: D,
    template_name: T,
    tag: V,
) -> Result<Response<MessageResponse>>
where
    D: AsRef<str>,
    T: AsRef<str>,
    V: AsRef<str>,
{
    let path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}/versions/{}",
        domain.as_ref(),
        template_name.as_ref(),
        tag.as_ref()
    ))?;

    client.run(Method::DELETE, path).await
}

/// Retrieve the versions of a template, one page at a time.
pub fn list_versions<C, D, T>(
    client: &C,
    domain: D,
    template_name: T,
    pagination: Option<Pagination>,
) -> Result<PageIterator<'_, C, TemplateVersionsPage>>
where
    C: RequestRunner,
    D: AsRef<str>,
    T: AsRef<str>,
{
    let mut path = client.make_url(&format!(
        "/v1/domains/{}/templates/{}/versions",
        domain.as_ref(),
        template_name.as_ref()
    ))?;
    if let Some(pagination) = pagination {
        if let Some(limit) = pagination.limit {
            path.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
    }

    Ok(PageIterator::new(client, path))
}
