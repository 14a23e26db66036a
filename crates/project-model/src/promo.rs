//! The built-in storyboard: a 160-second promotional video in five scenes.
//!
//! Asset paths are relative to the host's asset root.

use crate::shot::{
    BlendMode, CameraMove, ColorFilter, Effect, RendererKind, ShotDescriptor, SplitScreenSpec,
    Transition, TriptychSpec,
};
use crate::storyboard::{Scene, Storyboard, VideoConfig};

pub const FPS: u32 = 30;
pub const DURATION_IN_SECONDS: f64 = 160.0;
pub const DURATION_IN_FRAMES: u64 = FPS as u64 * 160;

const IMAGES: &str = "assets/images";
const VIDEOS: &str = "assets/videos";

fn img(name: &str) -> String {
    format!("{IMAGES}/{name}.jpg")
}

fn vid(name: &str) -> String {
    format!("{VIDEOS}/{name}.mp4")
}

/// The full promotional storyboard.
pub fn storyboard() -> Storyboard {
    Storyboard::new(
        "CloudflareVideo",
        VideoConfig {
            fps: FPS,
            duration_secs: DURATION_IN_SECONDS,
            ..VideoConfig::default()
        },
        vec![
            fragile_network(),
            questioning_the_status_quo(),
            invisible_guardian(),
            fairer_internet(),
            future_is_here(),
        ],
    )
}

/// Scene 1 (0:00 - 0:25).
fn fragile_network() -> Scene {
    Scene::new(
        "The fragile network",
        vec![
            ShotDescriptor::new(1, 0.0, 5.0)
                .image(img("global_network_earth"))
                .overlay(vid("earth_globe_rotating_space_4k"), 0.4, BlendMode::Overlay)
                .transition(Transition::Fade)
                .narration("互联网。")
                .camera(CameraMove::PushIn)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(2, 5.0, 5.0)
                .image(img("global_network_earth"))
                .overlay(vid("glitch_distortion_effect_4k"), 0.5, BlendMode::Overlay)
                .transition(Transition::Flash)
                .narration("连接着数十亿人的生活。")
                .camera(CameraMove::Shake)
                .effect(Effect::Glitch),
            ShotDescriptor::new(3, 10.0, 5.0)
                .image(img("website_error_concept"))
                .overlay(vid("digital_noise_static_4k"), 0.3, BlendMode::Overlay)
                .transition(Transition::HardCut)
                .text("ERROR 503\nCONNECTION FAILED")
                .narration("但你有没有想过——")
                .camera(CameraMove::Static)
                .effect(Effect::Glitch),
            ShotDescriptor::new(4, 15.0, 5.0)
                .image(img("stressed_user_computer"))
                .transition(Transition::Dissolve)
                .narration("它比你想象的更脆弱。")
                .camera(CameraMove::Static)
                .effect(Effect::ColorShift),
            // Deliberate black frame.
            ShotDescriptor::new(5, 20.0, 5.0)
                .image("")
                .transition(Transition::Fade)
                .camera(CameraMove::Static),
        ],
    )
}

/// Scene 2 (0:25 - 0:55).
fn questioning_the_status_quo() -> Scene {
    Scene::new(
        "Change starts with a question",
        vec![
            ShotDescriptor::new(6, 25.0, 5.0)
                .image(img("startup_office_team"))
                .overlay(vid("tech_particles_floating_hd"), 0.25, BlendMode::Screen)
                .transition(Transition::Dissolve)
                .narration("2009年，两个不甘平庸的人站了出来。")
                .camera(CameraMove::Pan)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(7, 30.0, 5.0)
                .image(img("startup_office_team"))
                .overlay(vid("hud_interface_futuristic_4k"), 0.2, BlendMode::Overlay)
                .transition(Transition::HardCut)
                .text("Cloudflare")
                .narration("他们问了一个问题——")
                .camera(CameraMove::PushIn)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(8, 35.0, 5.0)
                .image(img("data_center_blue_lights"))
                .overlay(vid("data_flow_network_4k"), 0.35, BlendMode::Overlay)
                .transition(Transition::Flash)
                .narration("为什么安全必须昂贵？")
                .camera(CameraMove::PushIn)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(9, 40.0, 5.0)
                .image(img("data_center_blue_lights"))
                .overlay(vid("matrix_code_rain_4k"), 0.15, BlendMode::Screen)
                .transition(Transition::LightLeak)
                .narration("为什么性能要让步于预算？")
                .camera(CameraMove::Tilt)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(10, 45.0, 5.0)
                .image(img("global_network_map"))
                .overlay(vid("global_network_connections_4k"), 0.4, BlendMode::Overlay)
                .transition(Transition::HardCut)
                .narration("Cloudflare，诞生于对现状的不妥协。")
                .camera(CameraMove::PullOut)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(11, 50.0, 5.0)
                .image(img("global_network_map"))
                .overlay(vid("network_nodes_particles_4k"), 0.45, BlendMode::Overlay)
                .transition(Transition::Dissolve)
                .narration(
                    "他们要做一件事——让每一个网站，都能拥有顶尖的安全和速度。不分大小，不问出身。",
                )
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns),
        ],
    )
}

/// Scene 3 (0:55 - 1:45).
fn invisible_guardian() -> Scene {
    Scene::new(
        "The invisible guardian",
        vec![
            ShotDescriptor::new(12, 55.0, 5.0)
                .image(img("engineers_monitoring_screens"))
                .overlay(vid("tech_data_background_4k"), 0.25, BlendMode::Overlay)
                .transition(Transition::HardCut)
                .text("300+ 数据中心")
                .narration("今天，Cloudflare 的网络遍布全球。")
                .camera(CameraMove::Pan)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(13, 60.0, 5.0)
                .image(img("engineers_monitoring_screens"))
                .overlay(vid("hud_interface_futuristic_4k"), 0.3, BlendMode::Overlay)
                .transition(Transition::Flash)
                .narration("300 多个城市，连接着世界每一个角落。")
                .camera(CameraMove::PushIn)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(14, 65.0, 5.0)
                .image(img("cybersecurity_shield"))
                .overlay(vid("energy_shield_force_field_4k"), 0.5, BlendMode::Overlay)
                .transition(Transition::HardCut)
                .text("3万亿次请求/天")
                .narration("每天，我们处理超过 3 万亿次请求。")
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(15, 70.0, 5.0)
                .image(img("cybersecurity_shield"))
                .overlay(vid("cybersecurity_tech_protection_hd"), 0.4, BlendMode::Overlay)
                .transition(Transition::Dissolve)
                .text("拦截数十亿次攻击")
                .narration("拦截数十亿次攻击。")
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(16, 75.0, 10.0)
                .image(img("mother_online_shopping"))
                .overlay(vid("geometric_network_lines_4k"), 0.15, BlendMode::Overlay)
                .transition(Transition::Flash)
                .narration(
                    "当你在深夜网购时，当孩子在课堂上看视频时，当创业者实现梦想时——Cloudflare 都在背后，为你护航。",
                )
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns)
                .renderer(RendererKind::CrossfadeTriptych(TriptychSpec::new([
                    img("mother_online_shopping"),
                    img("student_online_learning"),
                    img("small_business_owner"),
                ]))),
            ShotDescriptor::new(17, 85.0, 5.0)
                .image(img("mother_online_shopping"))
                .overlay(vid("tech_particles_floating_hd"), 0.2, BlendMode::Overlay)
                .transition(Transition::LightLeak)
                .narration("它就像互联网的免疫系统——")
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(18, 90.0, 5.0)
                .image(img("student_online_learning"))
                .overlay(vid("data_flow_network_4k"), 0.2, BlendMode::Overlay)
                .transition(Transition::LightLeak)
                .narration("默默无闻，却无处不在。")
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(19, 95.0, 10.0)
                .image(img("small_business_owner"))
                .overlay(vid("network_nodes_particles_4k"), 0.25, BlendMode::Overlay)
                .transition(Transition::Fade)
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns),
        ],
    )
}

/// Scene 4 (1:45 - 2:15).
fn fairer_internet() -> Scene {
    Scene::new(
        "A fairer internet",
        vec![
            ShotDescriptor::new(20, 105.0, 10.0)
                .image(img("enterprise_server_room"))
                .overlay(vid("data_flow_network_4k"), 0.3, BlendMode::Overlay)
                .transition(Transition::Dissolve)
                .narration(
                    "有人问，Cloudflare 是什么？我们说——它是让互联网变得更公平的力量。",
                )
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns)
                .renderer(RendererKind::SplitScreen(SplitScreenSpec::new(
                    img("enterprise_server_room"),
                    img("small_workspace_desk"),
                ))),
            ShotDescriptor::new(21, 115.0, 10.0)
                .image(img("diverse_team_computers"))
                .overlay(vid("geometric_network_lines_4k"), 0.2, BlendMode::Overlay)
                .transition(Transition::Flash)
                .text("Equality. Security. Speed.")
                .narration(
                    "让小企业也能拥有大企业的安全防护。让个人博客也能享受世界级的加速技术。让每一个人的声音，都能被世界听见。",
                )
                .camera(CameraMove::Pan)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(22, 125.0, 10.0)
                .image(img("diverse_team_computers"))
                .overlay(vid("hud_interface_futuristic_4k"), 0.25, BlendMode::Overlay)
                .transition(Transition::Dissolve)
                .narration("这不是技术炫耀。这是我们的信仰。")
                .camera(CameraMove::PullOut)
                .effect(Effect::KenBurns),
        ],
    )
}

/// Scene 5 (2:15 - 2:40).
fn future_is_here() -> Scene {
    Scene::new(
        "The future is here",
        vec![
            ShotDescriptor::new(23, 135.0, 5.0)
                .image(img("smart_city_robots"))
                .overlay(vid("tech_data_background_4k"), 0.3, BlendMode::Overlay)
                .transition(Transition::Flash)
                .narration("互联网的未来，正在被重新定义。")
                .camera(CameraMove::PushIn)
                .effect(Effect::KenBurns),
            ShotDescriptor::new(24, 140.0, 10.0)
                .image(img("smart_home_iot"))
                .overlay(vid("network_nodes_particles_4k"), 0.25, BlendMode::Overlay)
                .transition(Transition::Flash)
                .text("边缘计算 | AI | 无服务器")
                .narration("边缘计算、人工智能、无服务器架构——Cloudflare 站在最前沿。")
                .camera(CameraMove::Static)
                .effect(Effect::KenBurns)
                .renderer(RendererKind::CrossfadeTriptych(
                    TriptychSpec::new([
                        img("smart_home_iot"),
                        img("5g_network_tower"),
                        img("smart_city_robots"),
                    ])
                    .labels(["边缘计算", "人工智能", "无服务器"])
                    .image_filters(vec![
                        ColorFilter::Saturate { amount: 1.2 },
                        ColorFilter::Contrast { amount: 1.1 },
                    ]),
                )),
            ShotDescriptor::new(25, 150.0, 10.0)
                .image(img("earth_from_space"))
                .overlay(vid("earth_zoom_from_space_4k"), 0.35, BlendMode::Overlay)
                .transition(Transition::Fade)
                .text("Cloudflare - 帮助构建更好的互联网\nHelping Build a Better Internet")
                .narration(
                    "我们守护的不只是网站。是每一个连接。是每一份信任。是整个互联网的明天。",
                )
                .camera(CameraMove::PullOut)
                .effect(Effect::KenBurns),
        ],
    )
}
