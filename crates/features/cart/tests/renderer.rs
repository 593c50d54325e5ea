mod fixtures;

use basket_cart::{CartError, Redraw, RenderStats, RowAction, TableRenderer};
use basket_domain::{Cart, DeliveryMode, Reference};
use fixtures::*;

fn reference(raw: &str) -> Reference {
    Reference::try_from(raw).unwrap()
}

#[test]
fn full_render_binds_every_row() {
    let h = harness(Cart::sample());
    let mut table = TableRenderer::new(&h.events);
    assert!(!table.is_bound("5K96"));

    let view = table.render(&h.store);
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[1].name, "Coquillette");
    assert_eq!(view.rows[1].line_price_text(), "24.00");
    assert!(table.is_bound("5K96") && table.is_bound("98Y3") && table.is_bound("365D"));
    assert_eq!(table.stats(), RenderStats { full: 1, rows: 0, footer: 0 });
}

#[test]
fn quantity_edit_is_a_partial_redraw() {
    let mut h = harness(soap_cart());
    let mut table = TableRenderer::new(&h.events);
    table.render(&h.store);

    let action = RowAction::SetQuantity { reference: reference("5K96"), input: "10".into() };
    let redraw = table.dispatch(&mut h.store, action).unwrap();

    assert_eq!(redraw, Some(Redraw::Rows(vec![reference("5K96")])));
    assert_eq!(table.view().rows[0].line_price_text(), "60.00");
    assert!(close(table.view().footer.totals.grand_total, 77.0));
    assert_eq!(table.stats(), RenderStats { full: 1, rows: 1, footer: 0 });
}

#[test]
fn quantity_input_is_clamped_in_view() {
    let mut h = harness(soap_cart());
    let mut table = TableRenderer::new(&h.events);
    table.render(&h.store);

    let action = RowAction::SetQuantity { reference: reference("5K96"), input: "0".into() };
    table.dispatch(&mut h.store, action).unwrap();
    assert_eq!(table.view().rows[0].quantity.get(), 1);
}

#[test]
fn clamped_edit_at_maximum_still_redraws_the_row() {
    let mut h = harness(soap_cart());
    let mut table = TableRenderer::new(&h.events);
    table.render(&h.store);
    assert_eq!(table.view().rows[0].revision, 0);

    let to_max = RowAction::SetQuantity { reference: reference("5K96"), input: "10".into() };
    table.dispatch(&mut h.store, to_max).unwrap();
    let before = table.view().rows[0].clone();

    let over = RowAction::SetQuantity { reference: reference("5K96"), input: "42".into() };
    let redraw = table.dispatch(&mut h.store, over).unwrap();

    let after = &table.view().rows[0];
    assert_eq!(redraw, Some(Redraw::Rows(vec![reference("5K96")])));
    assert_eq!(after.quantity.get(), 10);
    assert_eq!(after.line_price_text(), before.line_price_text());
    assert_eq!(after.revision, before.revision + 1, "row must be keyed anew after a clamp");

    table.render(&h.store);
    assert_eq!(table.view().rows[0].revision, 0);
}

#[test]
fn non_numeric_quantity_is_rejected() {
    let mut h = harness(soap_cart());
    let mut table = TableRenderer::new(&h.events);
    table.render(&h.store);

    let action = RowAction::SetQuantity { reference: reference("5K96"), input: "lots".into() };
    let err = table.dispatch(&mut h.store, action).unwrap_err();
    assert!(matches!(err, CartError::InvalidInput { .. }));
    assert_eq!(h.store.cart(), &soap_cart());
    assert_eq!(table.pending(), None);
}

#[test]
fn delete_is_a_full_redraw() {
    let mut h = harness(Cart::sample());
    let mut table = TableRenderer::new(&h.events);
    table.render(&h.store);

    let redraw = table.dispatch(&mut h.store, RowAction::Delete { reference: reference("98Y3") });
    assert_eq!(redraw.unwrap(), Some(Redraw::Full));
    assert_eq!(table.view().rows.len(), 2);
    assert!(!table.is_bound("98Y3"));
    assert_eq!(table.stats().full, 2);
}

#[test]
fn delivery_change_redraws_footer_only() {
    let mut h = harness(soap_cart());
    let mut table = TableRenderer::new(&h.events);
    table.render(&h.store);

    assert_eq!(table.select_delivery(&mut h.store, DeliveryMode::Home), Some(Redraw::Footer));
    assert_eq!(table.view().footer.mode, DeliveryMode::Home);
    assert!(close(table.view().footer.totals.grand_total, 40.8));
    assert_eq!(table.stats(), RenderStats { full: 1, rows: 0, footer: 1 });
}

#[test]
fn actions_on_unbound_rows_fail() {
    let mut h = harness(soap_cart());
    let mut table = TableRenderer::new(&h.events);

    let before_render = table.dispatch(&mut h.store, RowAction::Delete { reference: reference("5K96") });
    assert!(matches!(before_render, Err(CartError::UnknownRow { .. })));

    table.render(&h.store);
    let unknown = table.dispatch(&mut h.store, RowAction::Delete { reference: reference("ZZ") });
    assert!(matches!(unknown, Err(CartError::UnknownRow { .. })));
    assert_eq!(h.store.cart(), &soap_cart());
}

#[test]
fn pending_redraws_coalesce_to_widest() {
    let mut h = harness(Cart::sample());
    let mut table = TableRenderer::new(&h.events);
    table.render(&h.store);

    h.store.set_delivery_mode(DeliveryMode::Home);
    h.store.set_quantity("5K96", 2).unwrap();
    h.store.set_quantity("365D", 3).unwrap();
    assert_eq!(table.pending(), Some(Redraw::Rows(vec![reference("5K96"), reference("365D")])));

    h.store.add(item("A1", "Pain", 1.0, 1)).unwrap();
    assert_eq!(table.pending(), Some(Redraw::Full));

    assert_eq!(table.refresh(&h.store), Some(Redraw::Full));
    assert_eq!(table.view().rows.len(), 4);
    assert_eq!(table.refresh(&h.store), None);
}

#[test]
fn dropping_the_renderer_unsubscribes() {
    let h = harness(soap_cart());
    let table = TableRenderer::new(&h.events);
    assert_eq!(h.events.listeners::<basket_cart::CartEvent>(), 1);
    drop(table);
    assert_eq!(h.events.listeners::<basket_cart::CartEvent>(), 0);
}
