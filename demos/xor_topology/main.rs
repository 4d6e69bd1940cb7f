/*
 * @Author       : 老董
 * @Date         : 2026-07-10
 * @Description  : 渲染一个解XOR问题的典型NEAT拓扑：
 *                 2个输入、1个输出、1个隐藏节点，外加一条被禁用的直连边。
 *                 运行后在当前目录生成 xor_topology.png。
 */
use neat_viz::genome::{Genome, NetworkConfig, NodeId};
use neat_viz::render::{NodeNames, RenderOptions, render_network};

fn main() {
    let mut genome = Genome::new();
    genome.add_node(NodeId(0));
    genome.add_node(NodeId(1));
    // 两个输入都连到隐藏节点1，再由1连到输出0
    genome.add_connection(NodeId(-1), NodeId(1), 2.3, true);
    genome.add_connection(NodeId(-2), NodeId(1), -1.7, true);
    genome.add_connection(NodeId(1), NodeId(0), 3.1, true);
    // 历史突变留下的直连边，已被禁用
    genome.add_connection(NodeId(-1), NodeId(0), 0.4, false);

    let config = NetworkConfig::new(vec![NodeId(-1), NodeId(-2)], vec![NodeId(0)]);

    let mut options = RenderOptions::new(640, 480);
    options.node_names = Some(NodeNames {
        inputs: vec!["x1".to_string(), "x2".to_string()],
        outputs: vec!["xor".to_string()],
    });
    options.save_path = Some("xor_topology.png".into());

    // 没有提供字体，名称标签会被跳过；如需标签可用LabelFont::from_bytes加载ttf
    match render_network(&genome, &config, &options, None) {
        Ok(output) => {
            println!(
                "渲染完成: {}x{} 像素",
                output.canvas.width(),
                output.canvas.height()
            );
            if let Some(path) = &output.saved_path {
                println!("已保存网络拓扑图: {:?}", path);
            }
            if let Some(err) = &output.save_error {
                eprintln!("保存失败: {err}");
            }
        }
        Err(e) => eprintln!("渲染失败: {e}"),
    }
}
