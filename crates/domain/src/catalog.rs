//! Static catalog of backend operations.
//!
//! Pure data: one constructor per logical operation, grouped by domain.
//! Paths are relative; the request pipeline prepends the API namespace
//! prefix (`/api/v1`).

use crate::endpoint::Endpoint;

/// User account and session operations.
pub mod user {
    use super::Endpoint;

    /// Register a new account.
    #[must_use]
    pub fn register() -> Endpoint {
        Endpoint::post("/users/register", false)
    }

    /// Exchange credentials for a session token.
    #[must_use]
    pub fn login() -> Endpoint {
        Endpoint::post("/users/login", false)
    }

    /// Terminate the current session.
    #[must_use]
    pub fn logout() -> Endpoint {
        Endpoint::post("/users/logout", true)
    }

    /// Obtain a fresh token for the current session.
    #[must_use]
    pub fn refresh_token() -> Endpoint {
        Endpoint::post("/users/refresh-token", true)
    }

    /// Fetch the authenticated user's profile.
    #[must_use]
    pub fn profile() -> Endpoint {
        Endpoint::get("/users/profile", true)
    }

    /// Update the authenticated user's profile.
    #[must_use]
    pub fn update_profile() -> Endpoint {
        Endpoint::put("/users/profile", true)
    }
}

/// Product listing operations.
pub mod product {
    use super::Endpoint;

    /// Publish a new product.
    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::post("/products", true)
    }

    /// Fetch one product by id. Public.
    #[must_use]
    pub fn detail(id: i64) -> Endpoint {
        Endpoint::get(format!("/products/{id}"), false)
    }

    /// Search products. Public; parameters travel as the query string.
    #[must_use]
    pub fn search() -> Endpoint {
        Endpoint::get("/products/search", false)
    }

    /// Update a product owned by the caller.
    #[must_use]
    pub fn update(id: i64) -> Endpoint {
        Endpoint::put(format!("/products/{id}"), true)
    }

    /// Delete a product owned by the caller.
    #[must_use]
    pub fn delete(id: i64) -> Endpoint {
        Endpoint::delete(format!("/products/{id}"), true)
    }

    /// List products published by the caller.
    #[must_use]
    pub fn mine() -> Endpoint {
        Endpoint::get("/products/user", true)
    }
}

/// Order operations.
pub mod order {
    use super::Endpoint;

    /// Place a new order.
    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::post("/orders", true)
    }

    /// Fetch one order by id.
    #[must_use]
    pub fn detail(id: i64) -> Endpoint {
        Endpoint::get(format!("/orders/{id}"), true)
    }

    /// List the caller's orders.
    #[must_use]
    pub fn mine() -> Endpoint {
        Endpoint::get("/orders", true)
    }

    /// Advance an order through its status lifecycle.
    #[must_use]
    pub fn update_status(id: i64) -> Endpoint {
        Endpoint::put(format!("/orders/{id}/status"), true)
    }

    /// Cancel an order.
    #[must_use]
    pub fn cancel(id: i64) -> Endpoint {
        Endpoint::delete(format!("/orders/{id}"), true)
    }
}

/// Conversation message operations.
pub mod message {
    use super::Endpoint;

    /// Send a message to another user.
    #[must_use]
    pub fn send() -> Endpoint {
        Endpoint::post("/messages", true)
    }

    /// Fetch one message by id.
    #[must_use]
    pub fn detail(id: i64) -> Endpoint {
        Endpoint::get(format!("/messages/{id}"), true)
    }

    /// List all messages in a conversation.
    #[must_use]
    pub fn conversation(conversation_id: i64) -> Endpoint {
        Endpoint::get(format!("/messages/conversation/{conversation_id}"), true)
    }

    /// Mark a message as read.
    #[must_use]
    pub fn mark_read(id: i64) -> Endpoint {
        Endpoint::put(format!("/messages/{id}/read"), true)
    }

    /// Delete a message.
    #[must_use]
    pub fn delete(id: i64) -> Endpoint {
        Endpoint::delete(format!("/messages/{id}"), true)
    }
}

/// Review operations.
pub mod review {
    use super::Endpoint;

    /// Leave a review on a completed order.
    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::post("/reviews", true)
    }

    /// Fetch one review by id.
    #[must_use]
    pub fn detail(id: i64) -> Endpoint {
        Endpoint::get(format!("/reviews/{id}"), true)
    }

    /// Delete a review written by the caller.
    #[must_use]
    pub fn delete(id: i64) -> Endpoint {
        Endpoint::delete(format!("/reviews/{id}"), true)
    }
}
