use async_graphql::value;
use async_graphql::Context;
use async_graphql::EmptyMutation;
use async_graphql::EmptySubscription;
use async_graphql::Object;
use async_graphql::Request;
use async_graphql::Response;
use async_graphql::Result;
use async_graphql::Schema;
use async_graphql::Variables;
use graph_scalars_graphql::{
    Address, BigInt, Bytes, Float32, Int16, Int8, ScalarConfig, UInt16, UInt8,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use slog::o;
use slog::Logger;

struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn address(&self, value: Address) -> Address {
        value
    }

    async fn bytes(&self, value: Bytes) -> Bytes {
        value
    }

    async fn big_int(&self, value: BigInt) -> BigInt {
        value
    }

    async fn int8(&self, value: Int8) -> Int8 {
        value
    }

    async fn int16(&self, value: Int16) -> Int16 {
        value
    }

    async fn uint8(&self, value: UInt8) -> UInt8 {
        value
    }

    async fn uint16(&self, value: UInt16) -> UInt16 {
        value
    }

    async fn float32(&self, value: Float32) -> Float32 {
        value
    }

    async fn finite_float32(&self, ctx: &Context<'_>, value: Float32) -> Result<Float32> {
        Float32::finite(ctx, value.0)
    }
}

type TestSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

fn schema(config: ScalarConfig) -> TestSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(config)
        .data(Logger::root(slog::Discard, o!()))
        .finish()
}

async fn execute(request: impl Into<Request>) -> Response {
    schema(ScalarConfig::default()).execute(request).await
}

fn error_messages(response: &Response) -> Vec<String> {
    response
        .errors
        .iter()
        .map(|err| err.message.clone())
        .collect()
}

#[tokio::test]
async fn echo_hex_and_decimal_strings() {
    let response = execute(
        r#"{
            address(value: "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            bytes(value: "deadbeef")
            bigInt(value: "-123456789012345678901234567890")
        }"#,
    )
    .await;

    assert_eq!(error_messages(&response), Vec::<String>::new());
    assert_eq!(
        response.data,
        value!({
            "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "bytes": "0xdeadbeef",
            "bigInt": "-123456789012345678901234567890",
        })
    );
}

#[tokio::test]
async fn echo_narrow_integers() {
    let response = execute(
        r#"{
            int8(value: -128)
            int16(value: "32767")
            uint8(value: 255)
            uint16(value: "65535")
        }"#,
    )
    .await;

    assert_eq!(error_messages(&response), Vec::<String>::new());
    assert_eq!(
        response.data,
        value!({
            "int8": -128,
            "int16": 32767,
            "uint8": 255,
            "uint16": 65535,
        })
    );
}

#[tokio::test]
async fn echo_floats() {
    let response = execute(
        r#"{
            half: float32(value: 0.5)
            text: float32(value: "-2.25")
            integer: float32(value: 3)
            infinity: float32(value: "+Inf")
        }"#,
    )
    .await;

    assert_eq!(error_messages(&response), Vec::<String>::new());
    assert_eq!(
        response.data,
        value!({
            "half": 0.5,
            "text": -2.25,
            "integer": 3,
            "infinity": "+Inf",
        })
    );
}

#[tokio::test]
async fn decode_variables() {
    let request = Request::new(
        "query($bytes: Bytes!, $amount: BigInt!) { bytes(value: $bytes) bigInt(value: $amount) }",
    )
    .variables(Variables::from_json(json!({
        "bytes": "0xCAFE",
        "amount": "1000000000000000000000000",
    })));

    let response = execute(request).await;

    assert_eq!(error_messages(&response), Vec::<String>::new());
    assert_eq!(
        response.data,
        value!({
            "bytes": "0xcafe",
            "bigInt": "1000000000000000000000000",
        })
    );
}

#[tokio::test]
async fn decode_unsigned_variables() {
    let request = Request::new(
        "query($small: UInt8!, $wide: UInt16!) { uint8(value: $small) uint16(value: $wide) }",
    )
    .variables(Variables::from_json(json!({
        "small": 200,
        "wide": "40000",
    })));

    let response = execute(request).await;

    assert_eq!(error_messages(&response), Vec::<String>::new());
    assert_eq!(
        response.data,
        value!({
            "uint8": 200,
            "uint16": 40000,
        })
    );
}

#[tokio::test]
async fn reject_non_string_address() {
    let response = execute("{ address(value: 42) }").await;
    let messages = error_messages(&response);

    assert_eq!(messages.len(), 1);
    assert!(
        messages[0].contains("Address must be a string, found number"),
        "unexpected message: {}",
        messages[0]
    );
}

#[tokio::test]
async fn reject_malformed_inputs() {
    let cases = [
        (r#"{ address(value: "not-hex") }"#, "invalid Address 'not-hex'"),
        (r#"{ bytes(value: "0x123") }"#, "invalid Bytes '0x123'"),
        (r#"{ bigInt(value: "abc") }"#, "invalid BigInt 'abc'"),
        ("{ uint8(value: -1) }", "invalid UInt8 '-1'"),
        ("{ int8(value: 128) }", "invalid Int8 '128'"),
        (r#"{ uint16(value: "65536") }"#, "invalid UInt16 '65536'"),
        ("{ int16(value: true) }", "Int16 must be"),
        (r#"{ float32(value: "fast") }"#, "invalid Float32 'fast'"),
        (r#"{ float32(value: "1e39") }"#, "invalid Float32 '1e39'"),
    ];

    for (query, expected) in cases {
        let response = execute(query).await;
        let messages = error_messages(&response);

        assert_eq!(messages.len(), 1, "query {query}");
        assert!(
            messages[0].contains(expected),
            "query {query}: unexpected message: {}",
            messages[0]
        );
    }
}

#[tokio::test]
async fn reject_non_finite_output() {
    let response = execute(r#"{ finiteFloat32(value: "-Inf") }"#).await;

    assert_eq!(
        error_messages(&response),
        vec!["Float32 value -Inf is not finite".to_owned()]
    );

    let response = execute("{ finiteFloat32(value: 1.5) }").await;

    assert_eq!(error_messages(&response), Vec::<String>::new());
    assert_eq!(response.data, value!({ "finiteFloat32": 1.5 }));
}

#[tokio::test]
async fn allow_non_finite_output_when_configured() {
    let config = ScalarConfig {
        allow_non_finite_floats: true,
    };

    let response = schema(config)
        .execute(r#"{ finiteFloat32(value: "NaN") }"#)
        .await;

    assert_eq!(error_messages(&response), Vec::<String>::new());
    assert_eq!(response.data, value!({ "finiteFloat32": "NaN" }));
}

#[tokio::test]
async fn apply_defaults_without_schema_data() {
    let schema = Schema::new(QueryRoot, EmptyMutation, EmptySubscription);
    let response = schema.execute(r#"{ finiteFloat32(value: "+Inf") }"#).await;

    assert_eq!(
        error_messages(&response),
        vec!["Float32 value +Inf is not finite".to_owned()]
    );
}

#[test]
fn register_scalars_in_sdl() {
    let sdl = schema(ScalarConfig::default()).sdl();

    let scalars: Vec<&str> = sdl
        .lines()
        .filter_map(|line| line.strip_prefix("scalar "))
        .collect();

    for name in [
        "Address", "Bytes", "BigInt", "Int8", "Int16", "UInt8", "UInt16", "Float32",
    ] {
        assert!(scalars.contains(&name), "missing scalar {name} in {scalars:?}");
    }

    assert!(!scalars.contains(&"Uint8"));
    assert!(!scalars.contains(&"Uint16"));
}
