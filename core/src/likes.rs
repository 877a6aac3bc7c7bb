//! The `likes.*` method group.
//!
//! Each builder fills the required parameters; optional ones are chained on
//! the returned call and only exist on the call types that accept them.

use crate::call::Call;
use crate::client::ApiClient;
use crate::types::{
    AddResponse, BoolInt, DeleteResponse, GetListResponse, IsLikedResponse, LikeType, LikesFilter,
};

pub const METHOD_ADD: &str = "likes.add";
pub const METHOD_DELETE: &str = "likes.delete";
pub const METHOD_GET_LIST: &str = "likes.getList";
pub const METHOD_IS_LIKED: &str = "likes.isLiked";

/// Builders for the `likes.*` methods. Obtained from [`ApiClient::likes`].
#[derive(Debug)]
pub struct Likes<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T> Likes<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Like an object. Returns the new like total.
    pub fn add(&self, kind: LikeType, item_id: i64) -> Call<'a, T, AddResponse> {
        self.client.call(METHOD_ADD, item_params(kind, item_id))
    }

    /// Remove a like. Returns the new like total.
    pub fn delete(&self, kind: LikeType, item_id: i64) -> Call<'a, T, DeleteResponse> {
        self.client.call(METHOD_DELETE, item_params(kind, item_id))
    }

    /// Ids of the users who liked an object.
    pub fn get_list(&self, kind: LikeType) -> Call<'a, T, GetListResponse> {
        self.client
            .call(METHOD_GET_LIST, vec![("type".to_string(), kind.as_str().to_string())])
    }

    /// Whether a user liked, and shared, an object.
    pub fn is_liked(&self, kind: LikeType, item_id: i64) -> Call<'a, T, IsLikedResponse> {
        self.client.call(METHOD_IS_LIKED, item_params(kind, item_id))
    }
}

fn item_params(kind: LikeType, item_id: i64) -> Vec<(String, String)> {
    vec![
        ("type".to_string(), kind.as_str().to_string()),
        ("item_id".to_string(), item_id.to_string()),
    ]
}

impl<T> Call<'_, T, AddResponse> {
    /// Owner of the object; defaults to the current user server-side.
    pub fn owner_id(self, owner_id: i64) -> Self {
        self.param("owner_id", owner_id)
    }

    /// Access key for objects in private sections.
    pub fn access_key(self, key: &str) -> Self {
        self.param("access_key", key)
    }
}

impl<T> Call<'_, T, DeleteResponse> {
    pub fn owner_id(self, owner_id: i64) -> Self {
        self.param("owner_id", owner_id)
    }

    pub fn access_key(self, key: &str) -> Self {
        self.param("access_key", key)
    }
}

impl<T> Call<'_, T, GetListResponse> {
    pub fn owner_id(self, owner_id: i64) -> Self {
        self.param("owner_id", owner_id)
    }

    pub fn item_id(self, item_id: i64) -> Self {
        self.param("item_id", item_id)
    }

    /// Page the widget is installed on, for `sitepage` objects.
    pub fn page_url(self, url: &str) -> Self {
        self.param("page_url", url)
    }

    pub fn filter(self, filter: LikesFilter) -> Self {
        self.param("filter", filter.as_str())
    }

    pub fn friends_only(self, friends_only: bool) -> Self {
        self.param("friends_only", BoolInt::from(friends_only).as_str())
    }

    pub fn offset(self, offset: u32) -> Self {
        self.param("offset", offset)
    }

    pub fn count(self, count: u32) -> Self {
        self.param("count", count)
    }

    pub fn skip_own(self, skip_own: bool) -> Self {
        self.param("skip_own", BoolInt::from(skip_own).as_str())
    }
}

impl<T> Call<'_, T, IsLikedResponse> {
    /// User to check; defaults to the current user server-side.
    pub fn user_id(self, user_id: i64) -> Self {
        self.param("user_id", user_id)
    }

    pub fn owner_id(self, owner_id: i64) -> Self {
        self.param("owner_id", owner_id)
    }
}
