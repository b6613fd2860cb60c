use serde::Deserialize;
use serde_json::{Map, Value};

#[cfg(target_arch = "wasm32")]
const DEFAULT_ENDPOINT: &str = "/api/respuestas";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_ENDPOINT: &str = "http://127.0.0.1:5000/api/respuestas";

pub const MSG_EXITO_DEFECTO: &str = "Tus respuestas se han enviado correctamente.";
pub const MSG_ERROR_SERVIDOR: &str = "Ocurrió un error al enviar las respuestas.";
pub const MSG_ERROR_CONEXION: &str = "No se pudo enviar la información. Intenta más tarde.";

/// Respuesta del backend: `{"mensaje": "..."}`, con el mensaje opcional.
#[derive(Debug, Deserialize)]
struct RespuestaServidor {
    mensaje: Option<String>,
}

/// Los tres desenlaces terminales de un intento de envío.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvioResult {
    Aceptado { mensaje: Option<String> },
    ErrorServidor { mensaje: String },
    ErrorConexion { mensaje: String },
}

/// true si alguna pregunta sigue sin responder.
pub fn respuestas_incompletas(respuestas: &[Option<u8>]) -> bool {
    respuestas.iter().any(|r| r.is_none())
}

/// Construye el objeto JSON `{"pregunta1": v1, ..., "preguntaN": vN}`,
/// con null en las entradas sin responder y las claves en orden de pregunta.
pub fn construir_payload(respuestas: &[Option<u8>]) -> Value {
    let mut payload = Map::new();
    for (i, respuesta) in respuestas.iter().enumerate() {
        let clave = format!("pregunta{}", i + 1);
        let valor = match respuesta {
            Some(v) => Value::from(*v),
            None => Value::Null,
        };
        payload.insert(clave, valor);
    }
    Value::Object(payload)
}

fn normalize_endpoint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.trim_end_matches('/').to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn endpoint_respuestas() -> String {
    std::env::var("ENCUESTA_API_ENDPOINT")
        .ok()
        .as_deref()
        .and_then(normalize_endpoint)
        .unwrap_or_else(|| DEFAULT_NATIVE_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn endpoint_respuestas() -> String {
    endpoint_from_build_env()
        .or_else(endpoint_from_meta)
        .or_else(endpoint_from_local_storage)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_build_env() -> Option<String> {
    option_env!("ENCUESTA_API_ENDPOINT").and_then(normalize_endpoint)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='encuesta-api-endpoint']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_endpoint)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_local_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item("encuesta_api_endpoint")
        .ok()?
        .as_deref()
        .and_then(normalize_endpoint)
}

/// POST del payload al backend (bloqueante; llamar desde un hilo de trabajo).
#[cfg(not(target_arch = "wasm32"))]
pub fn enviar_respuestas(payload: &Value) -> EnvioResult {
    let endpoint = endpoint_respuestas();
    log::info!("Enviando respuestas a {endpoint}");

    let client = reqwest::blocking::Client::new();
    let response = match client.post(&endpoint).json(payload).send() {
        Ok(response) => response,
        Err(err) => {
            log::error!("Fallo de conexión con el backend: {err}");
            return EnvioResult::ErrorConexion {
                mensaje: MSG_ERROR_CONEXION.to_string(),
            };
        }
    };

    let status = response.status();
    if status.is_success() {
        match response.json::<RespuestaServidor>() {
            Ok(body) => EnvioResult::Aceptado {
                mensaje: body.mensaje,
            },
            Err(err) => {
                // Respuesta ilegible: se trata igual que un fallo de transporte.
                log::error!("Respuesta JSON inválida del backend: {err}");
                EnvioResult::ErrorConexion {
                    mensaje: MSG_ERROR_CONEXION.to_string(),
                }
            }
        }
    } else {
        log::warn!("El backend devolvió HTTP {status}");
        let mensaje = response
            .json::<RespuestaServidor>()
            .ok()
            .and_then(|body| body.mensaje)
            .unwrap_or_else(|| MSG_ERROR_SERVIDOR.to_string());
        EnvioResult::ErrorServidor { mensaje }
    }
}

/// POST del payload al backend vía fetch (WASM).
#[cfg(target_arch = "wasm32")]
pub async fn enviar_respuestas(payload: &Value) -> EnvioResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let endpoint = endpoint_respuestas();
    log::info!("Enviando respuestas a {endpoint}");

    let payload_json = match serde_json::to_string(payload) {
        Ok(v) => v,
        Err(err) => {
            log::error!("No se pudo serializar el payload: {err}");
            return EnvioResult::ErrorConexion {
                mensaje: MSG_ERROR_CONEXION.to_string(),
            };
        }
    };

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload_json));

    let window = match web_sys::window() {
        Some(w) => w,
        None => {
            return EnvioResult::ErrorConexion {
                mensaje: MSG_ERROR_CONEXION.to_string(),
            };
        }
    };

    let request = match Request::new_with_str_and_init(&endpoint, &opts) {
        Ok(r) => r,
        Err(err) => {
            log::error!("No se pudo crear el request fetch: {err:?}");
            return EnvioResult::ErrorConexion {
                mensaje: MSG_ERROR_CONEXION.to_string(),
            };
        }
    };

    if request
        .headers()
        .set("Content-Type", "application/json")
        .is_err()
    {
        return EnvioResult::ErrorConexion {
            mensaje: MSG_ERROR_CONEXION.to_string(),
        };
    }

    let resp_value = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(v) => v,
        Err(err) => {
            log::error!("Fetch al backend falló: {err:?}");
            return EnvioResult::ErrorConexion {
                mensaje: MSG_ERROR_CONEXION.to_string(),
            };
        }
    };

    let response: Response = match resp_value.dyn_into() {
        Ok(r) => r,
        Err(_) => {
            return EnvioResult::ErrorConexion {
                mensaje: MSG_ERROR_CONEXION.to_string(),
            };
        }
    };

    let text = match response.text() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(v) => v.as_string().unwrap_or_default(),
            Err(err) => {
                log::error!("No se pudo leer el body de la respuesta: {err:?}");
                return EnvioResult::ErrorConexion {
                    mensaje: MSG_ERROR_CONEXION.to_string(),
                };
            }
        },
        Err(err) => {
            log::error!("No se pudo leer el body de la respuesta: {err:?}");
            return EnvioResult::ErrorConexion {
                mensaje: MSG_ERROR_CONEXION.to_string(),
            };
        }
    };

    if response.ok() {
        match serde_json::from_str::<RespuestaServidor>(&text) {
            Ok(body) => EnvioResult::Aceptado {
                mensaje: body.mensaje,
            },
            Err(err) => {
                log::error!("Respuesta JSON inválida del backend: {err}");
                EnvioResult::ErrorConexion {
                    mensaje: MSG_ERROR_CONEXION.to_string(),
                }
            }
        }
    } else {
        log::warn!("El backend devolvió HTTP {}", response.status());
        let mensaje = serde_json::from_str::<RespuestaServidor>(&text)
            .ok()
            .and_then(|body| body.mensaje)
            .unwrap_or_else(|| MSG_ERROR_SERVIDOR.to_string());
        EnvioResult::ErrorServidor { mensaje }
    }
}
