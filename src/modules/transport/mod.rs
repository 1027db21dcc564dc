pub mod port;
pub mod reqwest_transport;

pub use port::{
    HttpRequest, HttpResponse, HttpTransport, Method, MultipartForm, RequestBody, TransportError,
};
pub use reqwest_transport::ReqwestTransport;
