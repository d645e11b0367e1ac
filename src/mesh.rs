use glam::Vec3;
use std::f32::consts::TAU;
use wgpu::util::DeviceExt;

/// Interleaved vertex format shared by both pipelines.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };
}

/// CPU-side indexed triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Recenters the mesh on the origin and scales its largest extent to
    /// `size`. Imported assets come in arbitrary units; this keeps any of
    /// them framed by the default camera distance.
    pub fn fit_to(&mut self, size: f32) {
        if self.vertices.is_empty() {
            return;
        }
        let mut min = Vec3::from_array(self.vertices[0].position);
        let mut max = min;
        for v in &self.vertices {
            let p = Vec3::from_array(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        let center = (min + max) * 0.5;
        let extent = (max - min).max_element();
        let scale = size / (extent + f32::MIN_POSITIVE);
        for v in &mut self.vertices {
            let p = (Vec3::from_array(v.position) - center) * scale;
            v.position = p.to_array();
        }
    }
}

/// UV sphere with smooth normals.
pub fn sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let theta = v * std::f32::consts::PI;
        let (st, ct) = theta.sin_cos();
        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let phi = u * TAU;
            let (sp, cp) = phi.sin_cos();
            let normal = Vec3::new(st * cp, ct, st * sp);
            mesh.vertices.push(Vertex {
                position: (normal * radius).to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    mesh
}

/// Axis-aligned cube with flat-shaded faces.
pub fn cube(half: f32) -> MeshData {
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::NEG_Z, Vec3::X),
        (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut mesh = MeshData::default();
    for (normal, up, right) in faces {
        let base = mesh.vertices.len() as u32;
        for (sy, sx) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)] {
            let p = (normal + up * sy + right * sx) * half;
            mesh.vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Torus in the XZ plane with smooth normals.
pub fn torus(major: f32, minor: f32, major_segments: u32, minor_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();

    for i in 0..=major_segments {
        let u = i as f32 / major_segments as f32 * TAU;
        let (su, cu) = u.sin_cos();
        let ring_center = Vec3::new(cu * major, 0.0, su * major);
        for j in 0..=minor_segments {
            let v = j as f32 / minor_segments as f32 * TAU;
            let (sv, cv) = v.sin_cos();
            let normal = Vec3::new(cu * cv, sv, su * cv);
            mesh.vertices.push(Vertex {
                position: (ring_center + normal * minor).to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let stride = minor_segments + 1;
    for i in 0..major_segments {
        for j in 0..minor_segments {
            let a = i * stride + j;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
        }
    }

    mesh
}

/// Mesh uploaded to GPU buffers.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, data: &MeshData, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
