//! Integration tests for the dropdown visibility controller: hover
//! choreography, the debounced hide, and stale-timer cancellation.

use mercadito_integration_tests::{TestApp, hide_token, listing_id_after};

async fn pointer(app: &TestApp, zone: &str, action: &str) -> String {
    app.post_form("/cart/dropdown/pointer", &[("zone", zone), ("action", action)])
        .await
        .text()
        .await
        .expect("pointer body")
}

async fn fire(app: &TestApp, token: u64) -> String {
    let token = token.to_string();
    app.post_form("/cart/dropdown/hide", &[("token", &token)])
        .await
        .text()
        .await
        .expect("hide body")
}

/// Put one seeded product into the cart so the dropdown may open.
async fn stock_cart(app: &TestApp) {
    let html = app.get("/").await.text().await.expect("home body");
    let id = listing_id_after(&html, "Linen Shirt").expect("seed listing id");
    app.post_form("/cart/add", &[("listing_id", &id)]).await;
}

fn is_open(fragment: &str) -> bool {
    fragment.contains("cart-dropdown open")
}

#[tokio::test]
async fn the_dropdown_never_opens_over_an_empty_cart() {
    let app = TestApp::spawn().await;

    let fragment = pointer(&app, "icon", "mouseenter").await;
    assert!(!is_open(&fragment));

    let fragment = pointer(&app, "icon", "click").await;
    assert!(!is_open(&fragment));
}

#[tokio::test]
async fn hover_opens_and_the_delayed_hide_closes() {
    let app = TestApp::spawn().await;
    stock_cart(&app).await;

    let fragment = pointer(&app, "icon", "mouseenter").await;
    assert!(is_open(&fragment));
    assert!(hide_token(&fragment).is_none(), "no hide armed while hovering");

    let fragment = pointer(&app, "icon", "mouseleave").await;
    assert!(is_open(&fragment), "still open while the hide is pending");
    let token = hide_token(&fragment).expect("leave arms a hide");

    let fragment = fire(&app, token).await;
    assert!(!is_open(&fragment));
}

#[tokio::test]
async fn entering_the_panel_cancels_a_pending_hide() {
    let app = TestApp::spawn().await;
    stock_cart(&app).await;

    pointer(&app, "icon", "mouseenter").await;
    let fragment = pointer(&app, "icon", "mouseleave").await;
    let stale = hide_token(&fragment).expect("leave arms a hide");

    let fragment = pointer(&app, "panel", "mouseenter").await;
    assert!(is_open(&fragment));
    assert!(hide_token(&fragment).is_none(), "pending hide cancelled");

    // The old timer still fires after its delay; the token is stale and
    // the dropdown must stay open.
    let fragment = fire(&app, stale).await;
    assert!(is_open(&fragment));
}

#[tokio::test]
async fn a_newly_armed_hide_supersedes_the_previous_one() {
    let app = TestApp::spawn().await;
    stock_cart(&app).await;

    pointer(&app, "icon", "mouseenter").await;
    let first = hide_token(&pointer(&app, "icon", "mouseleave").await).expect("first hide");

    pointer(&app, "panel", "mouseenter").await;
    let second = hide_token(&pointer(&app, "panel", "mouseleave").await).expect("second hide");
    assert_ne!(first, second);

    assert!(is_open(&fire(&app, first).await), "superseded token is dead");
    assert!(!is_open(&fire(&app, second).await), "current token hides");
}

#[tokio::test]
async fn click_toggles_and_dismiss_closes() {
    let app = TestApp::spawn().await;
    stock_cart(&app).await;

    assert!(is_open(&pointer(&app, "icon", "click").await));
    assert!(!is_open(&pointer(&app, "icon", "click").await));

    assert!(is_open(&pointer(&app, "icon", "mouseenter").await));
    let fragment = app
        .post_form("/cart/dropdown/dismiss", &[])
        .await
        .text()
        .await
        .expect("dismiss body");
    assert!(!is_open(&fragment));
}

#[tokio::test]
async fn a_pending_hide_rerender_embeds_the_same_token() {
    let app = TestApp::spawn().await;
    stock_cart(&app).await;

    pointer(&app, "icon", "mouseenter").await;
    let armed = hide_token(&pointer(&app, "icon", "mouseleave").await).expect("hide armed");

    // A cart-updated refresh re-renders the dropdown; the pending hide
    // must survive the re-render with the same token.
    let fragment = app
        .get("/cart/dropdown")
        .await
        .text()
        .await
        .expect("dropdown body");
    assert_eq!(hide_token(&fragment), Some(armed));
}
