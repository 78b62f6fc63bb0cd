//! Inference fixtures from the studio's legacy filename corpus.

use scenesave_config::NamingConfig;
use scenesave_model::SceneFile;
use scenesave_naming::NamingEngine;

fn engine() -> NamingEngine {
    NamingEngine::new(NamingConfig::builtin()).expect("builtin engine")
}

fn assert_fields(
    scene: &SceneFile,
    description: &str,
    version: u32,
    discipline: &str,
    user: &str,
    extension: &str,
) {
    assert_eq!(scene.description, description, "description of {scene}");
    assert_eq!(scene.version, version, "version of {scene}");
    assert_eq!(scene.discipline, discipline, "discipline of {scene}");
    assert_eq!(scene.user, user, "user of {scene}");
    assert_eq!(scene.extension, extension, "extension of {scene}");
    assert_eq!(scene.note, None, "inference never produces a note");
}

#[test]
fn well_formed_names_round_trip_their_fields() {
    let engine = engine();
    assert_fields(
        &engine.infer("anim_cave.v005.ma"),
        "anim",
        5,
        "ANIM",
        "aw",
        "ma",
    );
    assert_fields(
        &engine.infer("mpc_human_rig_v02_jf.mb"),
        "mpc_human_rig",
        2,
        "RIG",
        "jf",
        "mb",
    );
    assert_fields(
        &engine.infer("macys_PV_020_fx_v006.mb"),
        "macys",
        6,
        "FX",
        "pv",
        "mb",
    );
}

#[test]
fn bare_name_falls_back_everywhere() {
    assert_fields(&engine().infer("test"), "untitled", 1, "MDL", "aw", "ma");
}

#[test]
fn empty_name_falls_back_everywhere() {
    assert_fields(&engine().infer(""), "untitled", 1, "MDL", "aw", "ma");
}

#[test]
fn messy_names_resolve_deterministically() {
    let engine = engine();
    assert_fields(
        &engine.infer("this_483_is_a_t_v493_est_v34322_lookdev_dsfiv39lename_v1032_aw.asdf"),
        "this_483_is_a_t_v493_est_v34322_lookdev_dsfiv39lename",
        1032,
        "LOOKDEV",
        "aw",
        "asdf",
    );
    assert_fields(
        &engine.infer("94_this_is_a_test_dsf_38493_ilename_1032_cr.mb"),
        "94_this_is_a_test_dsf_38493_ilename",
        1032,
        "MDL",
        "cr",
        "mb",
    );
    assert_fields(
        &engine.infer("43_this_is_a_test_43_dsfilename_1032_dk.ma"),
        "43_this_is_a_test_43_dsfilename",
        1032,
        "MDL",
        "dk",
        "ma",
    );
}

#[test]
fn short_tokens_can_read_as_initials() {
    // "is" sits between delimiters and nothing better follows, so it is
    // taken as the username and the description stops before it.
    let engine = engine();
    assert_fields(
        &engine.infer("this_is_a_test_48290_dsfilename_1032.fml"),
        "this",
        1032,
        "MDL",
        "is",
        "fml",
    );
    assert_fields(
        &engine.infer("this_is_a_test_29547_dsfilename_V1032.fum"),
        "this",
        1032,
        "MDL",
        "is",
        "fum",
    );
}

#[test]
fn uppercase_tokens_are_recovered() {
    let engine = engine();
    assert_fields(
        &engine.infer("SBN_SOC_EarthANIM_013_ac.aep"),
        "SBN_SOC",
        13,
        "ANIM",
        "ac",
        "aep",
    );
    assert_fields(
        &engine.infer("char_jellyfish_puffHeadA_LAYOUT_v05_mn_test.ma"),
        "char_jellyfish_puffHeadA",
        5,
        "LAYOUT",
        "mn",
        "ma",
    );
}

#[test]
fn leading_tokens_leave_description_defaulted() {
    assert_fields(
        &engine().infer("v01_brian_aw_LAYOUT.mc"),
        "untitled",
        1,
        "LAYOUT",
        "aw",
        "mc",
    );
}

#[test]
fn digits_inside_words_count_for_the_fallback() {
    // No v-prefixed run anywhere, so the last bare run wins even though it
    // is glued to a word.
    let scene = engine().infer("testing_crappy_last_3049_349_andWeDidntCare1049.osx");
    assert_eq!(scene.version, 1049);
    assert_eq!(scene.extension, "osx");
}

#[test]
fn increment_and_override_on_inferred_records() {
    let engine = engine();
    let scene = engine.infer("macys_PV_020_fx_v006.mb");
    assert_eq!(scene.increment(1).version, 7);
    assert_eq!(scene.increment(3).version, 9);
    assert_eq!(scene.with_version(5).version, 5);
    assert_eq!(scene.version, 6);
}

#[test]
fn rendered_names_reparse_to_the_same_fields() {
    let engine = engine();
    let scene = engine.infer("macys_PV_020_fx_v006.mb").increment(1);
    let rendered = engine.render(&scene).expect("render");
    assert_eq!(rendered, "macys_FX_v007_pv.mb");

    let reparsed = engine.infer(&rendered);
    assert_eq!(reparsed.discipline, "FX");
    assert_eq!(reparsed.version, 7);
    assert_eq!(reparsed.user, "pv");
    assert_eq!(reparsed.extension, "mb");
}
