//! Query construction properties of the fluent builder

use hitq::{QueryBuilder, ValidationError};
use hitq_client::catalogue::{keys, limits};

fn builder() -> QueryBuilder {
    QueryBuilder::with_endpoint("http://host/collect").expect("valid endpoint")
}

/// A value of exactly `bytes` UTF-8 bytes, mixing one- and two-byte chars.
fn utf8_value(bytes: usize) -> String {
    let mut value = "é".repeat(bytes / 2);
    if bytes % 2 == 1 {
        value.push('x');
    }
    assert_eq!(value.len(), bytes);
    value
}

type SizedSetter = for<'a> fn(&'a mut QueryBuilder, String) -> hitq::Result<&'a mut QueryBuilder>;

fn sized_fields() -> Vec<(&'static str, usize, SizedSetter)> {
    let table: &[(&'static str, usize, SizedSetter)] = &[
        (keys::DR, limits::DR, |qb, v| qb.with_dr(v)),
        (keys::CN, limits::CN, |qb, v| qb.with_cn(v)),
        (keys::CS, limits::CS, |qb, v| qb.with_cs(v)),
        (keys::CM, limits::CM, |qb, v| qb.with_cm(v)),
        (keys::CK, limits::CK, |qb, v| qb.with_ck(v)),
        (keys::CC, limits::CC, |qb, v| qb.with_cc(v)),
        (keys::CI, limits::CI, |qb, v| qb.with_ci(v)),
        (keys::SR, limits::SR, |qb, v| qb.with_sr(v)),
        (keys::VP, limits::VP, |qb, v| qb.with_vp(v)),
        (keys::DE, limits::DE, |qb, v| qb.with_de(v)),
        (keys::SD, limits::SD, |qb, v| qb.with_sd(v)),
        (keys::UL, limits::UL, |qb, v| qb.with_ul(v)),
        (keys::FL, limits::FL, |qb, v| qb.with_fl(v)),
        (keys::DL, limits::DL, |qb, v| qb.with_dl(v)),
        (keys::DH, limits::DH, |qb, v| qb.with_dh(v)),
        (keys::DP, limits::DP, |qb, v| qb.with_dp(v)),
        (keys::DT, limits::DT, |qb, v| qb.with_dt(v)),
        (keys::CD, limits::CD, |qb, v| qb.with_cd(v)),
        (keys::AN, limits::AN, |qb, v| qb.with_an(v)),
        (keys::AID, limits::AID, |qb, v| qb.with_aid(v)),
        (keys::AV, limits::AV, |qb, v| qb.with_av(v)),
        (keys::AIID, limits::AIID, |qb, v| qb.with_aiid(v)),
        (keys::EC, limits::EC, |qb, v| qb.with_ec(v)),
        (keys::EA, limits::EA, |qb, v| qb.with_ea(v)),
        (keys::EL, limits::EL, |qb, v| qb.with_el(v)),
        (keys::TI, limits::TI, |qb, v| qb.with_ti(v)),
        (keys::TA, limits::TA, |qb, v| qb.with_ta(v)),
        (keys::IN, limits::IN, |qb, v| qb.with_in(v)),
        (keys::IC, limits::IC, |qb, v| qb.with_ic(v)),
        (keys::IV, limits::IV, |qb, v| qb.with_iv(v)),
        (keys::CU, limits::CU, |qb, v| qb.with_cu(v)),
        (keys::SN, limits::SN, |qb, v| qb.with_sn(v)),
        (keys::SA, limits::SA, |qb, v| qb.with_sa(v)),
        (keys::ST, limits::ST, |qb, v| qb.with_st(v)),
        (keys::UTC, limits::UTC, |qb, v| qb.with_utc(v)),
        (keys::UTV, limits::UTV, |qb, v| qb.with_utv(v)),
        (keys::UTL, limits::UTL, |qb, v| qb.with_utl(v)),
        (keys::EXD, limits::EXD, |qb, v| qb.with_exd(v)),
        (keys::XID, limits::XID, |qb, v| qb.with_xid(v)),
    ];
    table.to_vec()
}

#[test]
fn byte_ceilings_accept_n_and_reject_n_plus_one() {
    for (key, limit, setter) in sized_fields() {
        let mut qb = builder();

        let exact = utf8_value(limit);
        setter(&mut qb, exact.clone()).unwrap_or_else(|e| panic!("{key}: {e}"));
        assert_eq!(qb.get(key), Some(exact.as_str()), "{key}");

        let err = setter(&mut qb, utf8_value(limit + 1)).unwrap_err();
        match err.validation() {
            Some(ValidationError::MaxLengthExceeded { limit: l, actual_bytes, .. }) => {
                assert_eq!((*l, *actual_bytes), (limit, limit + 1), "{key}");
            }
            other => panic!("{key}: unexpected {other:?}"),
        }
        assert_eq!(qb.get(key), Some(exact.as_str()), "{key} changed on failure");
    }
}

#[test]
fn single_parameter_round_trip() {
    let mut qb = builder();
    qb.parameter("aid", "123").unwrap();
    assert_eq!(qb.escaped_uri(), "http://host/collect?aid=123");
}

#[test]
fn call_order_is_preserved() {
    let mut qb = builder();
    qb.with_v("1").with_tid("UA-1-1");
    assert_eq!(qb.escaped_uri(), "http://host/collect?v=1&tid=UA-1-1");
}

#[test]
fn overwrite_keeps_first_position() {
    let mut qb = builder();
    qb.with_v1().with_tid("UA-1-1").with_tid("UA-2-2");
    assert_eq!(qb.query_string(), "v=1&tid=UA-2-2");

    qb.append_parameter("xvar", "a").unwrap();
    qb.append_parameter("xvar", "b").unwrap();
    assert_eq!(qb.query_string(), "v=1&tid=UA-2-2&xvar=a&xvar=b");
}

#[test]
fn templated_keys() {
    let mut qb = builder();
    qb.with_pr_n_id(7, "SKU1").unwrap();
    qb.with_il_x_pi_y_cd_z(1, 2, 3, "Member").unwrap();
    assert_eq!(qb.query_string(), "pr7id=SKU1&il1pi2cd3=Member");
}

#[test]
fn index_boundaries() {
    let mut qb = builder();
    for index in [1, 200] {
        qb.with_promo_n_id(index, "SHIP").unwrap();
        qb.with_cd_x(index, "Sports").unwrap();
        qb.with_il_x_nm(index, "Search Results").unwrap();
    }
    let accepted = qb.accumulator().clone();

    for index in [0, 201] {
        assert!(qb.with_promo_n_id(index, "SHIP").unwrap_err().is_validation());
        assert!(qb.with_cm_x(index, 47).unwrap_err().is_validation());
        assert!(qb.with_il_x_pi_y_id(1, index, "P1").unwrap_err().is_validation());
        assert!(qb.with_pr_x_cm_y(index, 1, "28").unwrap_err().is_validation());
    }
    assert_eq!(qb.accumulator(), &accepted);
}

#[test]
fn booleans_are_one_and_zero() {
    let mut qb = builder();
    qb.with_aip(true).with_je(false).with_ni(true).with_exf(false);
    assert_eq!(qb.query_string(), "aip=1&je=0&ni=1&exf=0");
}

#[test]
fn failed_call_is_repeatable_and_side_effect_free() {
    let mut qb = builder();
    qb.with_v1().with_tid("UA-1-1");
    let before = qb.escaped_uri();

    let first = qb.with_sr("x".repeat(21)).unwrap_err();
    let second = qb.with_sr("x".repeat(21)).unwrap_err();
    assert_eq!(first.kind(), second.kind());
    assert_eq!(qb.escaped_uri(), before);
}

#[test]
fn values_are_form_encoded() {
    let mut qb = builder();
    qb.with_t_as_page_view()
        .with_dp("/search?q=a b&c")
        .unwrap()
        .with_dt("Café")
        .unwrap();
    assert_eq!(
        qb.escaped_uri(),
        "http://host/collect?t=pageview&dp=%2Fsearch%3Fq%3Da+b%26c&dt=Caf%C3%A9"
    );
}

#[test]
fn empty_builder_has_no_query() {
    let qb = builder();
    assert_eq!(qb.escaped_uri(), "http://host/collect");
    assert_eq!(qb.build().query(), None);
}

#[test]
fn empty_key_is_rejected() {
    let mut qb = builder();
    assert!(qb.parameter("", "x").unwrap_err().is_invalid_argument());
}

#[test]
fn ecommerce_hit() {
    let mut qb = builder();
    qb.with_v1()
        .with_tid("UA-1-1")
        .with_cid("555")
        .with_t_as_event()
        .with_ec("Ecommerce")
        .unwrap()
        .with_ea("Refund")
        .unwrap()
        .with_ni(true)
        .with_ti("T12345")
        .unwrap()
        .with_pa_as_refund()
        .with_pr_n_id(1, "P12345")
        .unwrap()
        .with_pr_n_qt(1, 1)
        .unwrap();

    assert_eq!(
        qb.query_string(),
        "v=1&tid=UA-1-1&cid=555&t=event&ec=Ecommerce&ea=Refund&ni=1&ti=T12345&pa=refund&pr1id=P12345&pr1qt=1"
    );
}

#[test]
fn bad_endpoint_is_invalid_argument() {
    let err = QueryBuilder::with_endpoint("not a url").unwrap_err();
    assert!(err.is_invalid_argument());
}
