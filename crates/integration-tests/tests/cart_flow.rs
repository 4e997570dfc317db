//! End-to-end cart flows: add/merge, quantity edits, removal, clearing,
//! and badge synchronization, all through the HTMX endpoints.

use axum::http::StatusCode;

use toko_integration_tests::TestClient;

const WIDGET: &str = "id=p1&name=Widget&price=10000&quantity=1";

#[tokio::test]
async fn test_add_same_product_twice_merges_into_one_row() {
    let mut client = TestClient::new();

    let (status, body) = client.post_form("/cart/add", WIDGET).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Widget ditambahkan ke keranjang"));

    client.post_form("/cart/add", WIDGET).await;

    // One entry with quantity 2; rendered total is the doubled price.
    let (status, page) = client.get("/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.matches("<td>Widget</td>").count(), 1);
    assert!(page.contains("Total: Rp20.000"));

    let (_, badge) = client.get("/cart/count").await;
    assert!(badge.contains(">2<"));
}

#[tokio::test]
async fn test_add_merges_explicit_quantities() {
    let mut client = TestClient::new();

    client
        .post_form("/cart/add", "id=p1&name=Widget&price=10000&quantity=1")
        .await;
    client
        .post_form("/cart/add", "id=p1&name=Widget&price=10000&quantity=2")
        .await;

    let (_, badge) = client.get("/cart/count").await;
    assert!(badge.contains(">3<"));

    let (_, page) = client.get("/cart").await;
    assert!(page.contains("Total: Rp30.000"));
}

#[tokio::test]
async fn test_stepper_targets_rendered_from_state() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", WIDGET).await;

    // Quantity 1: decrement clamps to 1, increment targets 2.
    let (_, fragment) = client.get("/cart/items").await;
    assert!(fragment.contains("name=\"quantity\" value=\"1\""));
    assert!(fragment.contains("name=\"quantity\" value=\"2\""));
}

#[tokio::test]
async fn test_update_quantity_rerenders_totals() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", WIDGET).await;

    let (status, fragment) = client.post_form("/cart/update", "id=p1&quantity=5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("Total: Rp50.000"));

    let (_, badge) = client.get("/cart/count").await;
    assert!(badge.contains(">5<"));
}

#[tokio::test]
async fn test_update_quantity_to_zero_removes_item() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", WIDGET).await;

    let (_, fragment) = client.post_form("/cart/update", "id=p1&quantity=0").await;
    assert!(fragment.contains("Keranjang kosong"));
    assert!(fragment.contains("Total: Rp0"));
}

#[tokio::test]
async fn test_non_numeric_quantity_removes_item() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", WIDGET).await;

    let (_, fragment) = client.post_form("/cart/update", "id=p1&quantity=abc").await;
    assert!(fragment.contains("Keranjang kosong"));
}

#[tokio::test]
async fn test_remove_unknown_id_leaves_cart_unchanged() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", WIDGET).await;

    let (status, fragment) = client.post_form("/cart/remove", "id=missing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("<td>Widget</td>"));
    assert!(fragment.contains("Total: Rp10.000"));
}

#[tokio::test]
async fn test_remove_deletes_row() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", WIDGET).await;
    client
        .post_form("/cart/add", "id=p2&name=Gadget&price=5000&quantity=1")
        .await;

    let (_, fragment) = client.post_form("/cart/remove", "id=p1").await;
    assert!(!fragment.contains("<td>Widget</td>"));
    assert!(fragment.contains("<td>Gadget</td>"));
    assert!(fragment.contains("Total: Rp5.000"));
}

#[tokio::test]
async fn test_clear_empties_cart_and_hides_badge() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", WIDGET).await;
    client
        .post_form("/cart/add", "id=p2&name=Gadget&price=5000&quantity=3")
        .await;

    let (status, fragment) = client.post_form("/cart/clear", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("Keranjang kosong"));
    assert!(fragment.contains("Total: Rp0"));

    // Count 0 renders no badge at all.
    let (_, badge) = client.get("/cart/count").await;
    assert!(!badge.contains("cart-badge"));
}

#[tokio::test]
async fn test_empty_cart_page_shows_placeholder() {
    let mut client = TestClient::new();

    let (status, page) = client.get("/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Keranjang kosong"));
    assert!(page.contains("Total: Rp0"));
}

#[tokio::test]
async fn test_price_display_survives_into_rendered_row() {
    let mut client = TestClient::new();
    client
        .post_form(
            "/cart/add",
            "id=p1&name=Widget&price=10000&price_display=Rp10rb&quantity=1",
        )
        .await;

    let (_, fragment) = client.get("/cart/items").await;
    // The stored label wins over the derived format for the unit price.
    assert!(fragment.contains("<td>Rp10rb</td>"));
    // The line total is always derived.
    assert!(fragment.contains("<td>Rp10.000</td>"));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let mut first = TestClient::new();
    first.post_form("/cart/add", WIDGET).await;

    let mut second = TestClient::new();
    let (_, badge) = second.get("/cart/count").await;
    assert!(!badge.contains("cart-badge"));
}
