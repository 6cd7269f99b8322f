use {
    gloo::net::http::Request,
    serde::de::DeserializeOwned,
};

pub enum ReqError {
    /// The request completed but the server answered with a non-2xx status.
    Status(u16),
    /// Transport failure, or the body couldn't be parsed.
    Other(String),
}

pub async fn req_get_json<T: DeserializeOwned>(base_url: &str, path: &str) -> Result<T, ReqError> {
    let resp =
        Request::get(&format!("{}{}", base_url, path))
            .send()
            .await
            .map_err(|e| ReqError::Other(format!("Error sending request to [{}]: {}", path, e)))?;
    if !resp.ok() {
        return Err(ReqError::Status(resp.status()));
    }
    return Ok(
        resp
            .json::<T>()
            .await
            .map_err(|e| ReqError::Other(format!("Error parsing response body from [{}]: {}", path, e)))?,
    );
}
