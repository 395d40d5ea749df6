//! Automotive product catalog feature: CRUD plus search over the single
//! `productos_automotrices` resource. Deletion is logical (`activo = false`);
//! rows are never removed.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/productos` | List with `categoria`/`marca`/`activo` filters |
//! | GET | `/api/productos/buscar?q=` | Search active products |
//! | GET | `/api/productos/{id}` | Get by id (includes inactive) |
//! | POST | `/api/productos` | Create |
//! | PUT | `/api/productos/{id}` | Partial update |
//! | DELETE | `/api/productos/{id}` | Logical delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
