//! In-memory emulation of the `likes.*` API methods.
//!
//! Every method is `POST /method/{name}` with a form body. Successful calls
//! answer `200 {"response": ...}`; failures answer with an HTTP error status
//! and an `{"error": {"error_code", "error_msg"}}` body. The acting user is
//! read from the `x-user-id` header and defaults to [`DEFAULT_USER_ID`].

use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Form, Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const USER_HEADER: &str = "x-user-id";
pub const DEFAULT_USER_ID: i64 = 1;

const LIKE_TYPES: &[&str] = &[
    "post",
    "comment",
    "photo",
    "audio",
    "video",
    "note",
    "market",
    "photo_comment",
    "video_comment",
    "topic_comment",
    "market_comment",
    "sitepage",
    "story",
];

const DEFAULT_PAGE_SIZE: usize = 100;
const MAX_PAGE_SIZE: usize = 1000;

/// A likeable object.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LikeKey {
    pub kind: String,
    pub owner_id: i64,
    pub item_id: i64,
}

/// User ids per object, in the order the likes arrived.
pub type Db = Arc<RwLock<BTreeMap<LikeKey, Vec<i64>>>>;

#[derive(Serialize)]
pub struct Likes {
    pub likes: usize,
}

#[derive(Serialize)]
pub struct LikeList {
    pub count: usize,
    pub items: Vec<i64>,
}

#[derive(Serialize)]
pub struct LikedState {
    pub liked: u8,
    pub copied: u8,
}

/// An API-level rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub status: StatusCode,
    pub code: i64,
    pub message: String,
}

impl Fault {
    fn missing(name: &str) -> Self {
        Self::invalid_param(format!("{name} is undefined"))
    }

    fn invalid(name: &str) -> Self {
        Self::invalid_param(format!("{name} is invalid"))
    }

    fn invalid_param(detail: String) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: 100,
            message: format!("One of the parameters specified was missing or invalid: {detail}"),
        }
    }

    fn access_denied() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            code: 15,
            message: "Access denied".to_string(),
        }
    }

    fn unknown_method() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: 3,
            message: "Unknown method passed".to_string(),
        }
    }

    pub fn body(&self) -> Value {
        json!({ "error": { "error_code": self.code, "error_msg": self.message } })
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/method/{method}", post(call_method))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn call_method(
    State(db): State<Db>,
    Path(method): Path<String>,
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let outcome = match acting_user(&headers) {
        Ok(user) => {
            let mut likes = db.write().await;
            dispatch(&mut likes, &method, user, &params)
        }
        Err(fault) => Err(fault),
    };

    match outcome {
        Ok(response) => {
            tracing::info!(%method, "method handled");
            (StatusCode::OK, Json(json!({ "response": response })))
        }
        Err(fault) => {
            tracing::info!(%method, status = fault.status.as_u16(), code = fault.code, "method rejected");
            (fault.status, Json(fault.body()))
        }
    }
}

fn acting_user(headers: &HeaderMap) -> Result<i64, Fault> {
    match headers.get(USER_HEADER) {
        None => Ok(DEFAULT_USER_ID),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Fault::invalid(USER_HEADER)),
    }
}

/// Run `method` against `likes` on behalf of `user`.
pub fn dispatch(
    likes: &mut BTreeMap<LikeKey, Vec<i64>>,
    method: &str,
    user: i64,
    params: &HashMap<String, String>,
) -> Result<Value, Fault> {
    match method {
        "likes.add" => {
            let key = item_key(params, user)?;
            let likers = likes.entry(key).or_default();
            if !likers.contains(&user) {
                likers.push(user);
            }
            to_value(Likes { likes: likers.len() })
        }
        "likes.delete" => {
            let key = item_key(params, user)?;
            let likers = likes.get_mut(&key).ok_or_else(Fault::access_denied)?;
            let position = likers
                .iter()
                .position(|id| *id == user)
                .ok_or_else(Fault::access_denied)?;
            likers.remove(position);
            let remaining = likers.len();
            if remaining == 0 {
                likes.remove(&key);
            }
            to_value(Likes { likes: remaining })
        }
        "likes.getList" => get_list(likes, user, params),
        "likes.isLiked" => {
            let key = item_key(params, user)?;
            let target: i64 = optional(params, "user_id")?.unwrap_or(user);
            let liked = likes.get(&key).is_some_and(|likers| likers.contains(&target));
            to_value(LikedState {
                liked: u8::from(liked),
                copied: 0,
            })
        }
        _ => Err(Fault::unknown_method()),
    }
}

/// Likers of the matching objects, deduplicated in like order.
///
/// No reposts are recorded, so `filter=copies` always yields an empty list.
/// `page_url` is not interpreted.
fn get_list(
    likes: &BTreeMap<LikeKey, Vec<i64>>,
    user: i64,
    params: &HashMap<String, String>,
) -> Result<Value, Fault> {
    let kind = like_type(params)?;
    let owner_id: i64 = optional(params, "owner_id")?.unwrap_or(user);
    let item_id: Option<i64> = optional(params, "item_id")?;
    let offset: usize = optional(params, "offset")?.unwrap_or(0);
    let count: usize = optional(params, "count")?
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);
    let skip_own = optional::<u8>(params, "skip_own")? == Some(1);
    let copies_only = match params.get("filter").map(String::as_str) {
        None | Some("likes") => false,
        Some("copies") => true,
        Some(_) => return Err(Fault::invalid("filter")),
    };

    let mut all: Vec<i64> = Vec::new();
    if !copies_only {
        let matching = likes.iter().filter(|(key, _)| {
            key.kind == kind && key.owner_id == owner_id && item_id.is_none_or(|id| key.item_id == id)
        });
        for (_, likers) in matching {
            for id in likers {
                if !all.contains(id) && !(skip_own && *id == user) {
                    all.push(*id);
                }
            }
        }
    }

    let total = all.len();
    let items = all.into_iter().skip(offset).take(count).collect();
    to_value(LikeList { count: total, items })
}

fn item_key(params: &HashMap<String, String>, user: i64) -> Result<LikeKey, Fault> {
    Ok(LikeKey {
        kind: like_type(params)?,
        owner_id: optional(params, "owner_id")?.unwrap_or(user),
        item_id: required(params, "item_id")?,
    })
}

fn like_type(params: &HashMap<String, String>) -> Result<String, Fault> {
    let kind = params.get("type").ok_or_else(|| Fault::missing("type"))?;
    if LIKE_TYPES.contains(&kind.as_str()) {
        Ok(kind.clone())
    } else {
        Err(Fault::invalid("type"))
    }
}

fn required<T: FromStr>(params: &HashMap<String, String>, name: &str) -> Result<T, Fault> {
    optional(params, name)?.ok_or_else(|| Fault::missing(name))
}

fn optional<T: FromStr>(params: &HashMap<String, String>, name: &str) -> Result<Option<T>, Fault> {
    params
        .get(name)
        .map(|raw| raw.parse().map_err(|_| Fault::invalid(name)))
        .transpose()
}

fn to_value<T: Serialize>(response: T) -> Result<Value, Fault> {
    serde_json::to_value(response).map_err(|e| Fault {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: 1,
        message: format!("Unknown error occurred: {e}"),
    })
}
