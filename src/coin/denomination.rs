// 面值表
//
// 脉冲数到货币值的静态映射。投币器对一枚硬币按其面值
// 连发对应数量的脉冲

/// 面值表：精确脉冲数 -> 货币值
pub const DENOMINATION_TABLE: [(u32, u32); 4] = [(1, 1), (5, 5), (10, 10), (20, 20)];

/// 查表解析一簇脉冲
///
/// 表外的脉冲数返回 None（未识别，计零）
pub fn value_for(pulses: u32) -> Option<u32> {
    DENOMINATION_TABLE
        .iter()
        .find(|&&(count, _)| count == pulses)
        .map(|&(_, value)| value)
}
