//! Draw submission through the recording backend.

use std::rc::Rc;

use ember_engine::{
    Actor, BackendCall, BlendMode, EngineConfig, Mesh, MeshComponent, Primitive, RecordingBackend,
    Renderer, Scene, ShaderId, SpriteComponent, Texture, TextureId, Uniform, VertexArrayId,
};
use glam::Vec3;

fn texture(id: u32) -> Texture {
    Texture {
        id: TextureId(id),
        width: 32,
        height: 32,
    }
}

fn mesh(shader: &str, vao: u32) -> Rc<Mesh> {
    Rc::new(Mesh {
        shader_name: shader.to_owned(),
        radius: 1.0,
        spec_power: 50.0,
        textures: vec![Some(texture(100 + vao))],
        vertex_array: VertexArrayId(vao),
        index_count: 36,
    })
}

fn sprite(scene: &mut Scene, draw_order: i32) {
    scene.spawn(
        Actor::new().with_component(SpriteComponent::with_draw_order(
            Some(texture(draw_order as u32)),
            draw_order,
        )),
    );
}

fn ready_renderer(backend: &mut RecordingBackend) -> Renderer {
    let config = EngineConfig::default();
    let mut renderer = Renderer::new(&config);
    renderer.initialize(backend, &config).unwrap();
    backend.reset();
    renderer
}

#[test]
fn sprites_submit_in_ascending_draw_order() {
    let mut backend = RecordingBackend::new();
    let renderer = ready_renderer(&mut backend);
    let mut scene = Scene::new();
    for order in [5, 1, 3] {
        sprite(&mut scene, order);
    }
    scene.update(0.016);

    let stats = scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    assert_eq!(stats.sprites_drawn, 3);
    assert_eq!(backend.drawn_textures(), vec![TextureId(1), TextureId(3), TextureId(5)]);
}

#[test]
fn equal_draw_order_keeps_insertion_order() {
    let mut backend = RecordingBackend::new();
    let renderer = ready_renderer(&mut backend);
    let mut scene = Scene::new();
    scene.spawn(Actor::new().with_component(SpriteComponent::with_draw_order(Some(texture(10)), 3)));
    scene.spawn(Actor::new().with_component(SpriteComponent::with_draw_order(Some(texture(1)), 1)));
    scene.spawn(Actor::new().with_component(SpriteComponent::with_draw_order(Some(texture(11)), 3)));

    scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    assert_eq!(
        backend.drawn_textures(),
        vec![TextureId(1), TextureId(10), TextureId(11)]
    );
}

#[test]
fn meshes_draw_before_sprites_with_pass_state() {
    let mut backend = RecordingBackend::new();
    let renderer = ready_renderer(&mut backend);
    let mut scene = Scene::new();
    sprite(&mut scene, 1);
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("Phong", 40)))));
    scene.update(0.016);

    scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    let calls = backend.calls();

    assert!(matches!(calls.first(), Some(BackendCall::Clear(_))));
    assert_eq!(calls.last(), Some(&BackendCall::Present));

    let pos = |target: &BackendCall| calls.iter().position(|c| c == target).unwrap();
    let depth_on = pos(&BackendCall::DepthTest(true));
    let opaque = pos(&BackendCall::Blend(BlendMode::Disabled));
    let mesh_vao = pos(&BackendCall::BindVertexArray(VertexArrayId(40)));
    let depth_off = pos(&BackendCall::DepthTest(false));
    let alpha = pos(&BackendCall::Blend(BlendMode::Alpha));
    let sprite_tex = pos(&BackendCall::BindTexture(TextureId(1)));

    assert!(depth_on < mesh_vao && opaque < mesh_vao);
    assert!(mesh_vao < depth_off);
    assert!(depth_off < sprite_tex && alpha < sprite_tex);
}

#[test]
fn lit_groups_receive_light_uniforms() {
    let mut backend = RecordingBackend::new();
    let renderer = ready_renderer(&mut backend);
    let mut scene = Scene::new();
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("BasicMesh", 41)))));
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("Phong", 42)))));
    scene.update(0.016);

    scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    let calls = backend.calls();
    let uniforms: Vec<&str> = calls
        .iter()
        .filter_map(|c| match c {
            BackendCall::SetUniform { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();

    // BasicMesh registered first, so its group is drawn first and stays unlit.
    let first_light = uniforms.iter().position(|&n| n == "uAmbientLight").unwrap();
    let first_spec = uniforms.iter().position(|&n| n == "uSpecPower").unwrap();
    assert!(first_spec < first_light);
    assert_eq!(uniforms.iter().filter(|&&n| n == "uCameraPos").count(), 1);
    assert!(uniforms.contains(&"uDirLight.mDirection"));
}

#[test]
fn mesh_groups_keep_first_registration_order() {
    let mut backend = RecordingBackend::new();
    let renderer = ready_renderer(&mut backend);
    let mut scene = Scene::new();
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("Phong", 21)))));
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("BasicMesh", 22)))));
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("Phong", 23)))));

    scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    let vaos: Vec<u32> = backend
        .calls()
        .iter()
        .filter_map(|c| match c {
            // The sprite quad is bound too; only keep mesh arrays.
            BackendCall::BindVertexArray(v) if v.0 > 20 => Some(v.0),
            _ => None,
        })
        .collect();
    assert_eq!(vaos, vec![21, 23, 22]);
}

#[test]
fn unknown_shader_group_is_skipped() {
    let mut backend = RecordingBackend::new();
    let renderer = ready_renderer(&mut backend);
    let mut scene = Scene::new();
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("Toon", 7)))));

    let stats = scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.meshes_drawn, 0);
    assert_eq!(backend.calls().last(), Some(&BackendCall::Present));
}

#[test]
fn failing_draw_is_counted_and_frame_continues() {
    let config = EngineConfig::default();
    let mut backend = RecordingBackend::new().fail_draws_with(TextureId(2));
    let mut renderer = Renderer::new(&config);
    renderer.initialize(&mut backend, &config).unwrap();

    let mut scene = Scene::new();
    for order in [1, 2, 3] {
        sprite(&mut scene, order);
    }
    let stats = scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.sprites_drawn, 2);
    assert_eq!(backend.drawn_textures(), vec![TextureId(1), TextureId(3)]);
    assert_eq!(backend.calls().last(), Some(&BackendCall::Present));
}

#[test]
fn destroyed_drawables_leave_the_lists() {
    let mut backend = RecordingBackend::new();
    let renderer = ready_renderer(&mut backend);
    let mut scene = Scene::new();
    let a = scene.spawn(Actor::new().with_component(SpriteComponent::new(Some(texture(1)))));
    scene.spawn(Actor::new().with_component(MeshComponent::new(Some(mesh("Phong", 5)))));
    assert_eq!(scene.draw_lists().sprite_count(), 1);
    assert_eq!(scene.draw_lists().mesh_count(), 1);

    assert!(scene.destroy(a));
    assert_eq!(scene.draw_lists().sprite_count(), 0);

    scene.render(|s| renderer.draw(s, &mut backend)).unwrap();
    assert!(backend.drawn_textures().iter().all(|&t| t != TextureId(1)));
}

#[test]
fn sprite_pass_uses_screen_projection() {
    let config = EngineConfig::default();
    let mut backend = RecordingBackend::new();
    let mut renderer = Renderer::new(&config);
    renderer.initialize(&mut backend, &config).unwrap();
    backend.reset();

    let mut scene = Scene::new();
    scene.spawn(
        Actor::new()
            .with_position(Vec3::new(10.0, 0.0, 0.0))
            .with_component(SpriteComponent::new(Some(texture(9)))),
    );
    scene.update(0.016);
    scene.render(|s| renderer.draw(s, &mut backend)).unwrap();

    // Sprite shader was the first one loaded.
    let calls = backend.calls();
    let activate = calls
        .iter()
        .position(|c| *c == BackendCall::Activate(ShaderId(1)))
        .unwrap();
    assert_eq!(
        calls[activate + 1],
        BackendCall::SetUniform {
            name: "uViewProj".to_owned(),
            value: Uniform::Mat4(renderer.projection().sprite_view_proj()),
        }
    );
    assert!(calls.contains(&BackendCall::DrawIndexed {
        primitive: Primitive::Triangles,
        index_count: 6,
    }));
}

#[test]
fn draw_before_initialize_is_an_error() {
    let renderer = Renderer::new(&EngineConfig::default());
    let mut backend = RecordingBackend::new();
    let mut scene = Scene::new();
    assert!(scene.render(|s| renderer.draw(s, &mut backend)).is_err());
    assert!(backend.calls().is_empty());
}
