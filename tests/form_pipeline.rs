//! End-to-end pipeline tests: fetch a definition fixture, render the form,
//! and drive submissions against a scripted HTTP stub.

use formwright::{create_form, BlockConfig, Extensions, SubmitOutcome};
use formwright_client::test_utils::StubHttpClient;
use formwright_client::{SubmissionRequest, TransformerChain};
use formwright_core::{FieldDefinition, Result};

const CONTACT_FORM: &str = include_str!("fixtures/definitions/contact_form.json");
const SOURCE_URL: &str = "https://example.com/forms/contact.json";

async fn contact_form(http: &StubHttpClient) -> formwright::FormInstance {
    http.push_response(200, CONTACT_FORM);
    create_form(http, SOURCE_URL, &Extensions::none(), &BlockConfig::new())
        .await
        .expect("fixture renders")
}

#[tokio::test]
async fn test_contact_form_renders_every_field() {
    let http = StubHttpClient::new();
    let form = contact_form(&http).await;
    let html = form.html();

    assert!(html.contains("data-action=\"/forms/contact\""));
    assert!(html.contains("<input type=\"text\""));
    assert!(html.contains("placeholder=\"Jane Doe\""));
    assert!(html.contains("required=\"required\""));
    assert!(html.contains("Pick a topic"));
    assert!(html.contains("maxlength=\"40\""));
    // Textareas take no length constraints, a stray Max column is ignored
    assert!(!html.contains("maxlength=\"500\""));
    assert!(html.contains("data-redirect=\"confirmation\""));
    // Description wiring
    assert!(html.contains("aria-describedby=\"email-description\""));
    assert!(html.contains("We reply within two working days"));
}

#[tokio::test]
async fn test_contact_form_groups_the_address_fieldset() {
    let http = StubHttpClient::new();
    let form = contact_form(&http).await;

    form.with_element(|el| {
        let fieldset = el
            .find_descendant(&|e| e.tag() == "fieldset" && e.attr("name") == Some("address"))
            .expect("address fieldset present");
        assert!(fieldset
            .find_descendant(&|e| e.attr("name") == Some("street"))
            .is_some());
        assert!(fieldset
            .find_descendant(&|e| e.attr("name") == Some("city"))
            .is_some());
        // Grouped wrappers left the top level
        assert!(!el
            .child_elements()
            .any(|e| e.tag() != "fieldset" && e.attr("data-fieldset") == Some("address")));
    });
}

#[tokio::test]
async fn test_submit_round_trip() {
    let http = StubHttpClient::new();
    let form = contact_form(&http).await;
    http.push_response(200, "{}");

    let outcome = form
        .submit(&http, &TransformerChain::none())
        .await
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Redirected("confirmation".to_string()));

    let recorded = http.recorded();
    assert_eq!(recorded.len(), 2); // one GET, one POST
    let post = &recorded[1];
    assert_eq!(post.method, "POST");
    assert_eq!(post.url, "/forms/contact");
    assert!(post
        .headers
        .contains(&("Content-Type".to_string(), "application/json".to_string())));

    let body: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    let data = &body["data"];
    assert_eq!(data["name"], "");
    assert_eq!(data["topic"], "Support");
    assert_eq!(data["consent"], "yes");
    assert!(data["__id__"].is_number());
    // The fieldset itself never contributes
    assert!(data.get("address").is_none());
}

#[tokio::test]
async fn test_failed_submit_can_be_retried() {
    let http = StubHttpClient::new();
    let form = contact_form(&http).await;
    http.push_response(503, "unavailable");
    http.push_response(200, "{}");

    let outcome = form
        .submit(&http, &TransformerChain::none())
        .await
        .unwrap();
    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    assert!(!form.is_submitting());

    let outcome = form
        .submit(&http, &TransformerChain::none())
        .await
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Redirected("confirmation".to_string()));
}

#[tokio::test]
async fn test_transformer_sees_the_definitions() {
    let http = StubHttpClient::new();
    let form = contact_form(&http).await;
    http.push_response(200, "{}");

    let mut chain = TransformerChain::none();
    chain.push(
        |mut req: SubmissionRequest, defs: &[FieldDefinition]| -> Result<SubmissionRequest> {
            req.set_header("X-Field-Count", defs.len().to_string());
            Ok(req)
        },
    );
    form.submit(&http, &chain).await.unwrap();

    let post = &http.recorded()[1];
    assert!(post
        .headers
        .contains(&("X-Field-Count".to_string(), "9".to_string())));
}
