//! API documentation
//!
//! The OpenAPI document is generated from the `ROUTES` table. The table is
//! kept next to the router by hand; the HTTP tests request every entry.

use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Map, Value};

/// One documented operation
#[derive(Debug, Clone, Copy)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    /// `(name, description)` pairs for query parameters
    pub query: &'static [(&'static str, &'static str)],
    /// Whether `{id}` appears in the path
    pub path_id: bool,
    pub has_body: bool,
    /// `(status, description)` pairs
    pub responses: &'static [(u16, &'static str)],
}

/// Every operation exposed under `/cadastros`
pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "get",
        path: "/cadastros",
        summary: "Retorna cadastros por id, nome, ou level",
        query: &[
            ("id", "Filtrar por ID"),
            ("name", "Filtrar por nome"),
            ("level", "Filtrar por level"),
        ],
        path_id: false,
        has_body: false,
        responses: &[
            (200, "Lista de cadastros filtrados"),
            (404, "Nenhum cadastro encontrado"),
        ],
    },
    RouteDoc {
        method: "post",
        path: "/cadastros",
        summary: "Adicionar um novo usuário",
        query: &[],
        path_id: false,
        has_body: true,
        responses: &[(201, "Cadastro criado"), (400, "Erro na requisição")],
    },
    RouteDoc {
        method: "get",
        path: "/cadastros/{id}",
        summary: "Retorna um cadastro pelo ID",
        query: &[],
        path_id: true,
        has_body: false,
        responses: &[(200, "Cadastro encontrado"), (404, "Cadastro não encontrado")],
    },
    RouteDoc {
        method: "put",
        path: "/cadastros/{id}",
        summary: "Atualiza um cadastro existente",
        query: &[],
        path_id: true,
        has_body: true,
        responses: &[(200, "Cadastro atualizado"), (404, "Cadastro não encontrado")],
    },
    RouteDoc {
        method: "delete",
        path: "/cadastros/{id}",
        summary: "Remove um cadastro existente",
        query: &[],
        path_id: true,
        has_body: false,
        responses: &[(204, "Cadastro removido"), (404, "Cadastro não encontrado")],
    },
];

/// `GET /api-docs`
pub async fn api_docs() -> impl IntoResponse {
    Json(openapi_document())
}

/// Build the OpenAPI 3.0 document for [`ROUTES`]
pub fn openapi_document() -> Value {
    let mut paths = Map::new();
    for route in ROUTES {
        let entry = paths
            .entry(route.path.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(ops) = entry {
            ops.insert(route.method.to_string(), operation(route));
        }
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "API de Usuários",
            "version": "1.0.0",
            "description": "API para gerenciar usuários",
        },
        "paths": paths,
        "components": {
            "schemas": {
                "Cadastro": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "level": { "type": "string" },
                    },
                    "additionalProperties": true,
                    "example": { "id": "123", "name": "João Silva", "level": "user" },
                }
            }
        }
    })
}

fn operation(route: &RouteDoc) -> Value {
    let mut parameters: Vec<Value> = route
        .query
        .iter()
        .map(|(name, description)| {
            json!({
                "in": "query",
                "name": name,
                "schema": { "type": "string" },
                "description": description,
            })
        })
        .collect();

    if route.path_id {
        parameters.push(json!({
            "in": "path",
            "name": "id",
            "required": true,
            "schema": { "type": "string" },
            "description": "ID do cadastro",
        }));
    }

    let mut responses = Map::new();
    for (status, description) in route.responses {
        let mut response = json!({ "description": description });
        if *status == 200 || *status == 201 {
            response["content"] = json!({
                "application/json": { "schema": success_schema(route) }
            });
        }
        responses.insert(status.to_string(), response);
    }

    let mut op = json!({
        "summary": route.summary,
        "responses": responses,
    });
    if !parameters.is_empty() {
        op["parameters"] = Value::Array(parameters);
    }
    if route.has_body {
        op["requestBody"] = json!({
            "required": true,
            "content": {
                "application/json": {
                    "schema": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "level": { "type": "string" },
                        },
                    }
                }
            }
        });
    }
    op
}

fn success_schema(route: &RouteDoc) -> Value {
    let item = json!({ "$ref": "#/components/schemas/Cadastro" });
    if route.method == "get" && !route.path_id {
        json!({ "type": "array", "items": item })
    } else {
        item
    }
}
