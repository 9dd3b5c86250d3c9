//! The built-in demo story: a short suspense piece in twelve-odd scenes.
//!
//! Three endings (`refuse_help`, `left_parking`, `look_for_mom`), each
//! routing back to `start`, so the graph is loop-closed.

use crate::story::{Choice, SceneNode, StoryError, StoryGraph};

fn scene(key: &str, text: &str, choices: &[(&str, &str)]) -> SceneNode {
    SceneNode {
        key: key.to_string(),
        text: text.to_string(),
        choices: choices
            .iter()
            .map(|(label, target)| Choice::new(*label, *target))
            .collect(),
    }
}

/// Build the demo story graph. Validation cannot fail for the shipped
/// script, but the `Result` keeps the construction surface uniform with
/// externally loaded stories.
pub fn demo_story() -> Result<StoryGraph, StoryError> {
    let scenes = vec![
        scene(
            "start",
            "你和男子A来到小区，眼前有三栋建筑。你们决定走中间那栋楼。",
            &[("继续上楼", "lobby")],
        ),
        scene(
            "lobby",
            "上楼后，右边是像电影院柜台的前台，左边有一些房间。你发现一间房门前挂着'咖啡店'的牌子。男子A走向前台询问租房情况。",
            &[("巡视左边房门", "inspect_left"), ("等男子A回来", "wait_for_A")],
        ),
        scene(
            "inspect_left",
            "你在左边巡逻，确认了咖啡店的门牌。下楼时你看到楼梯旁有一个立牌，写着这里快要举办活动。",
            &[("下楼离开", "downstairs")],
        ),
        scene(
            "downstairs",
            "你下楼离开了大楼。门口贴着活动海报，楼里隐约传来广播声。你想起男子A还没回来。",
            &[("回到大厅", "lobby")],
        ),
        scene(
            "wait_for_A",
            "你等了一会儿，男子A回来后说他约了朋友吃东西，要先去忙。你们分开行动，他离开后没多久，一个小女孩出现在你面前。她想要找妈妈，请你陪她。",
            &[("陪她找妈妈", "with_girl"), ("拒绝离开", "refuse_help")],
        ),
        scene(
            "refuse_help",
            "你选择离开。路上的剧情迅速和你无关——游戏结束（线性结局：冷漠留下遗憾）。",
            &[("重新开始", "start")],
        ),
        scene(
            "with_girl",
            "女孩大约小学一年级，口齿清晰，标准普通话，和你说她来这里是和妈妈还有奶奶一起来的。你心生保护欲，准备陪她。",
            &[("继续前进", "walk_along")],
        ),
        scene(
            "walk_along",
            "天色渐暗，你们走到一个分叉口。左边是亮着灯的停车场，看起来安全；右边是黑暗的施工工地后方。女孩坚持要走右边。",
            &[
                ("说服她走左边（安全）", "left_parking"),
                ("顺她意走右边（主线）", "right_construction"),
            ],
        ),
        scene(
            "left_parking",
            "你走了左边，路上平平淡淡，找到几位住户询问，也没有发现女孩的母亲。最后你把女孩安全送回，故事平静结束（'安全但遗憾'结局）。",
            &[("重新开始", "start")],
        ),
        scene(
            "right_construction",
            "你们从工地后方绕到前方，路过热闹的大排档。男子A正在和两个外国人吃烧烤。你联想到二楼的咖啡店，决定加快脚步回去。",
            &[("赶回二楼咖啡店", "back_to_cafe")],
        ),
        scene(
            "back_to_cafe",
            "二楼正在举行活动，广播提醒没有票者离场。你拖着女孩下楼，外面突然下起了大雨。广场上人群四散，突然传来疯狗暴走的喧嚣。",
            &[("冲向咖啡店门口", "cafe_entrance")],
        ),
        scene(
            "cafe_entrance",
            "你带着女孩来到咖啡店门前。女孩看到咖啡店激动寻找妈妈。广播继续，活动人群慌乱。雨更大了。",
            &[("留在门口继续找", "look_for_mom")],
        ),
        scene(
            "look_for_mom",
            "就在这时，一只疯狗袭向广场，人群四散，狗扑向小女孩，咬伤了她的腿。你愤怒爆发，踢死了疯狗。女孩流血，事件结束——游戏结局（悲剧/救赎并存）。",
            &[("重新开始", "start")],
        ),
    ];

    StoryGraph::new("start", scenes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_story_validates() {
        let graph = demo_story().unwrap();
        assert_eq!(graph.start_key(), "start");
        assert_eq!(graph.len(), 13);
    }

    #[test]
    fn every_ending_routes_back_to_start() {
        let graph = demo_story().unwrap();
        for key in ["refuse_help", "left_parking", "look_for_mom"] {
            let node = graph.lookup(key).unwrap();
            assert_eq!(node.choices.len(), 1);
            assert_eq!(node.choices[0].target_key, "start");
        }
    }
}
