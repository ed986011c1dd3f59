//! Request assembly and response resolution against a recording transport.

use std::fmt;
use std::sync::{Arc, Mutex};

use assert2::{check, let_assert};
use restchain::prelude::*;
use restchain::url::Url;
use restchain::{Request, TerminalFactory};
use serde::de::DeserializeOwned;

/// Answers every request with a fixed response and keeps the requests.
#[derive(Debug, Clone, Default)]
struct Recorder {
    response: Response,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl Recorder {
    fn answering(response: Response) -> Self {
        Self {
            response,
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<Request> {
        let_assert!(Ok(requests) = self.requests.lock());
        requests.clone()
    }
}

impl Transport for Recorder {
    async fn execute(&self, _host: &Url, request: Request) -> restchain::Result<Response> {
        let_assert!(Ok(mut requests) = self.requests.lock());
        requests.push(request);
        Ok(self.response.clone())
    }
}

fn client(recorder: &Recorder) -> RestClient<Recorder> {
    let_assert!(Ok(host) = Url::parse("http://localhost/api/"));
    RestClient::json(recorder.clone(), host)
}

#[derive(Debug, Serialize)]
struct NewUser {
    name: &'static str,
}

const NULL_DETAILS: &str = r#"{"StatusCode":400,"Message":"m","Details":null}"#;

// ============================================================================
// Request
// ============================================================================

#[tokio::test]
async fn body_uses_request_settings() {
    let recorder = Recorder::answering(Response::new(204));
    let client = client(&recorder);

    let result = client
        .post::<(), _>("users", NewUser { name: "Ada" })
        .with_settings(JsonSettings::new().pretty())
        .with_processor(UnitAsSuccessProcessor)
        .get_result()
        .await;
    check!(result.is_ok());

    let requests = recorder.requests();
    let_assert!([request] = requests.as_slice());
    check!(request.method() == Method::Post);
    check!(request.path() == "users");
    check!(request.header("Content-Type") == Some("application/json"));
    let_assert!(Some(body) = request.body());
    check!(body.content() == "{\n  \"name\": \"Ada\"\n}");
}

#[tokio::test]
async fn get_sends_no_body() {
    let recorder = Recorder::answering(Response::new(200).with_body("1"));
    let client = client(&recorder);

    let result = client
        .get::<i32>("counter")
        .with_header("Accept", "application/json")
        .get_result()
        .await;
    let_assert!(Ok(1) = result);

    let requests = recorder.requests();
    let_assert!([request] = requests.as_slice());
    check!(request.body().is_none());
    check!(request.header("Content-Type").is_none());
    check!(request.header("Accept") == Some("application/json"));
}

// ============================================================================
// Resolution
// ============================================================================

#[tokio::test]
async fn user_processors_run_before_the_exception_terminal() {
    let missing = Recorder::answering(Response::new(404));
    let result = client(&missing)
        .get::<bool>("users/1")
        .with_processor(BoolAsNotFoundProcessor)
        .get_result()
        .await;
    let_assert!(Ok(false) = result);

    let failing = Recorder::answering(Response::new(500).with_body("boom"));
    let result = client(&failing)
        .get::<bool>("users/1")
        .with_processor(BoolAsNotFoundProcessor)
        .get_result()
        .await;
    let_assert!(Err(err) = result);
    let_assert!(Some(http_error) = err.rest_error());
    check!(http_error.details.as_deref() == Some("boom"));
}

#[tokio::test]
async fn with_structure_replaces_processors() {
    let recorder = Recorder::answering(Response::new(404));
    let result = client(&recorder)
        .get::<Option<i32>>("values/1")
        .with_processor(IdentityProcessor::new())
        .with_structure(ProcessorStructure::new().with(OptionAsNotFoundProcessor::new()))
        .get_result()
        .await;

    let_assert!(Ok(None) = result);
}

#[tokio::test]
async fn error_settings_apply_to_error_bodies_only() {
    let recorder = Recorder::answering(Response::new(400).with_body(NULL_DETAILS));
    let client = client(&recorder);

    let lenient = client
        .get::<Either<RestBusinessError, i32>>("values/1")
        .with_processor(EitherRestErrorProcessor::rest())
        .with_settings(JsonSettings::new().reject_nulls())
        .get_result()
        .await;
    let_assert!(Ok(Either::Left(error)) = lenient);
    check!(error.message == "m");
    check!(error.details.is_empty());

    let strict = client
        .get::<Either<RestBusinessError, i32>>("values/1")
        .with_processor(EitherRestErrorProcessor::rest())
        .with_error_settings(JsonSettings::new().reject_nulls())
        .get_result()
        .await;
    let_assert!(Ok(Either::Left(error)) = strict);
    check!(error.error_type == ErrorType::ValidationError);
    check!(error.details == NULL_DETAILS);
}

#[tokio::test]
async fn either_into_rest_result() {
    let recorder = Recorder::answering(
        Response::new(400).with_body(r#"{"StatusCode":400,"Message":"Invalid","Details":"x"}"#),
    );
    let result = client(&recorder)
        .get::<Either<RestBusinessError, i32>>("values/1")
        .with_processor(EitherRestErrorProcessor::rest())
        .get_result()
        .await;

    let_assert!(Ok(either) = result);
    let_assert!(Err(err) = either.into_rest_result());
    insta::assert_snapshot!(err.to_string(), @"REST error: Invalid");
}

// ============================================================================
// Custom terminal
// ============================================================================

#[derive(Debug)]
struct ServiceDown(u16);

impl fmt::Display for ServiceDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service down (status {})", self.0)
    }
}

impl std::error::Error for ServiceDown {}

/// Raises [`ServiceDown`] with the response status for every error.
#[derive(Debug, Clone, Copy)]
struct StatusTerminal;

impl TerminalFactory<JsonSerializer> for StatusTerminal {
    fn terminal<T>(&self) -> Box<dyn ProcessorNode<T, JsonSerializer>>
    where
        T: DeserializeOwned + 'static,
    {
        Box::new(
            ExceptionProcessor::<T, u16, Error, JsonSerializer>::new(|status: u16| {
                Error::business(ServiceDown(status))
            })
            .with_defaults::<serde_json::Value>(|_: Option<serde_json::Value>, response: &Response| {
                response.status()
            }),
        )
    }
}

#[tokio::test]
async fn client_terminal_factory_is_used() {
    let recorder = Recorder::answering(Response::new(503).with_body("maintenance"));
    let_assert!(Ok(host) = Url::parse("http://localhost/api/"));
    let client = RestClient::with_serializers(
        recorder,
        host,
        JsonSerializer::new(),
        JsonSerializer::new(),
        StatusTerminal,
    );

    let_assert!(Err(err) = client.get::<i32>("values").get_result().await);
    let_assert!(Some(ServiceDown(status)) = err.business_error::<ServiceDown>());
    check!(*status == 503);
    check!(err.to_string() == "business error: service down (status 503)");
}
